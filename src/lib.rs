//! # Bounded Thread-Safe Circular Queue
//!
//! 有界线程安全环形队列
//!
//! `circqueue` is a fixed-capacity FIFO queue over a contiguous ring of slots,
//! shared safely between any number of producer and consumer threads.
//!
//! `circqueue` 是一个基于连续环形槽位的固定容量 FIFO 队列，
//! 可在任意数量的生产者和消费者线程之间安全共享。
//!
//! ## Features
//!
//! 特性
//!
//! - **Bounded** - Exact capacity fixed at construction, never grows
//! - **O(1)** - Enqueue and dequeue move indices, never shift elements
//! - **Linearizable** - Every operation runs under one exclusive lock
//! - **Non-blocking** - Full and empty are reported as errors immediately
//! - **Stack/Heap Optimization** - Small queues keep their slots inline
//!
//! - **有界** - 构造时确定精确容量，从不增长
//! - **O(1)** - 入队和出队只移动索引，从不移动元素
//! - **线性一致** - 每个操作都在同一把互斥锁下执行
//! - **非阻塞** - 满和空立即作为错误返回
//! - **栈/堆优化** - 小队列的槽位内联存储
//!
//! ## Quick Start
//!
//! 快速开始
//!
//! ```rust
//! use circqueue::RingQueue;
//!
//! // Create a queue with capacity 3, stack threshold 32
//! // 创建一个容量为 3 的队列，栈容量阈值为 32
//! let queue: RingQueue<i32, 32> = RingQueue::new(3);
//!
//! queue.enqueue(1).unwrap();
//! queue.enqueue(2).unwrap();
//! queue.enqueue(3).unwrap();
//! assert!(queue.enqueue(4).is_err());
//!
//! // Read the front, then discard it
//! // 读取队首，然后丢弃
//! assert_eq!(queue.front(), Ok(1));
//! queue.dequeue().unwrap();
//!
//! // Or take it in one step
//! // 或一步取出
//! assert_eq!(queue.pop(), Ok(2));
//! ```
//!
//! ## Multi-threaded Usage
//!
//! 多线程使用
//!
//! ```rust
//! use circqueue::RingQueue;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let queue = Arc::new(RingQueue::<u64, 64>::new(16));
//!
//! let producers: Vec<_> = (0..4u64)
//!     .map(|id| {
//!         let queue = Arc::clone(&queue);
//!         thread::spawn(move || {
//!             for i in 0..100 {
//!                 let mut value = id * 1000 + i;
//!                 // Retry policy belongs to the caller
//!                 // 重试策略由调用者决定
//!                 while let Err(full) = queue.enqueue(value) {
//!                     value = full.into_inner();
//!                     thread::yield_now();
//!                 }
//!             }
//!         })
//!     })
//!     .collect();
//!
//! let consumer = {
//!     let queue = Arc::clone(&queue);
//!     thread::spawn(move || {
//!         let mut received = 0;
//!         while received < 400 {
//!             match queue.pop() {
//!                 Ok(_) => received += 1,
//!                 Err(_) => thread::yield_now(),
//!             }
//!         }
//!         received
//!     })
//! };
//!
//! for handle in producers {
//!     handle.join().unwrap();
//! }
//! assert_eq!(consumer.join().unwrap(), 400);
//! assert!(queue.is_empty());
//! ```
//!
//! ## API Overview
//!
//! API 概览
//!
//! - `enqueue(value)` - Append at the rear, `Err(CapacityExceeded(value))` when full
//! - `dequeue()` - Discard the front element, `Err(QueueEmpty)` when empty
//! - `pop()` - Remove and return the front element
//! - `front()` / `rear()` - Copy the oldest / newest element (requires `T: Clone`)
//! - `is_empty()` / `is_full()` - State checks
//! - `capacity()` / `len()` / `free_slots()` - Sizes
//! - `clear()` - Drop all elements
//! - `to_vec()` - Snapshot of the contents, oldest first
//!
//! - `enqueue(value)` - 在队尾追加，满时返回 `Err(CapacityExceeded(value))`
//! - `dequeue()` - 丢弃队首元素，空时返回 `Err(QueueEmpty)`
//! - `pop()` - 移除并返回队首元素
//! - `front()` / `rear()` - 复制最旧 / 最新元素（需要 `T: Clone`）
//! - `is_empty()` / `is_full()` - 状态检查
//! - `capacity()` / `len()` / `free_slots()` - 容量与数量
//! - `clear()` - drop 所有元素
//! - `to_vec()` - 内容快照，从最旧开始
//!
//! ## Notes
//!
//! 注意事项
//!
//! - Capacity is exact; zero is allowed and yields a queue that is always empty and full
//! - Remaining elements are dropped with the queue
//! - Enable the `loom` feature to run the queue under loom's model checker
//!
//! - 容量是精确的；允许为零，此时队列始终既空又满
//! - 剩余元素随队列一起 drop
//! - 启用 `loom` 特性可在 loom 模型检查器下运行队列

pub mod error;
pub mod queue;
mod core;
mod shim;
mod slots;

pub use error::{CapacityExceeded, QueueEmpty};
pub use queue::RingQueue;
