//! Bounded, thread-safe circular FIFO queue
//!
//! 有界、线程安全的环形 FIFO 队列
//!
//! This module provides `RingQueue`, which supports:
//! - Arbitrary element types
//! - Exact, fixed capacity (including zero)
//! - Inline slot storage for small capacities (≤N), heap storage otherwise
//! - Linearizable access from any number of threads through `&self`
//! - Non-blocking operations: full and empty are reported as errors, never awaited
//!
//! 本模块提供 `RingQueue`，支持：
//! - 任意元素类型
//! - 精确、固定的容量（包括零）
//! - 小容量（≤N）内联槽位存储，否则使用堆存储
//! - 通过 `&self` 供任意数量线程线性一致地访问
//! - 非阻塞操作：满和空作为错误返回，从不等待

use std::fmt;
use std::sync::PoisonError;

use crate::core::RingCore;
use crate::error::{CapacityExceeded, QueueEmpty};
use crate::shim::sync::{Mutex, MutexGuard};

/// Fixed-capacity, thread-safe circular queue
///
/// 固定容量、线程安全的环形队列
///
/// # Type Parameters
/// - `T`: Element type
/// - `N`: Stack capacity threshold (slots stored inline when capacity ≤ N, heap otherwise)
///
/// # 类型参数
/// - `T`: 元素类型
/// - `N`: 栈容量阈值（容量 ≤ N 时槽位内联存储，否则使用堆）
///
/// # Concurrency
///
/// Every operation except `capacity()` holds one exclusive lock for its whole
/// duration, reads included. No operation waits for space or content.
///
/// # 并发
///
/// 除 `capacity()` 外，每个操作在整个执行期间持有同一把互斥锁（读取操作亦然）。
/// 任何操作都不会等待空间或元素。
///
/// # Examples
///
/// ```
/// use circqueue::{QueueEmpty, RingQueue};
///
/// let queue: RingQueue<i32> = RingQueue::new(3);
/// queue.enqueue(1).unwrap();
/// queue.enqueue(2).unwrap();
/// queue.enqueue(3).unwrap();
/// assert!(queue.is_full());
///
/// queue.dequeue().unwrap();
/// queue.enqueue(4).unwrap();
/// assert_eq!(queue.front(), Ok(2));
/// assert_eq!(queue.rear(), Ok(4));
///
/// assert_eq!(queue.pop(), Ok(2));
/// assert_eq!(queue.pop(), Ok(3));
/// assert_eq!(queue.pop(), Ok(4));
/// assert_eq!(queue.pop(), Err(QueueEmpty));
/// ```
pub struct RingQueue<T, const N: usize = 32> {
    /// Fixed at construction; read without the lock
    ///
    /// 构造时确定；无需加锁读取
    capacity: usize,

    /// Queue state, only ever touched under the lock
    ///
    /// 队列状态，仅在持锁时访问
    core: Mutex<RingCore<T, N>>,
}

impl<T, const N: usize> RingQueue<T, N> {
    /// Create an empty queue holding at most `capacity` elements
    ///
    /// 创建最多容纳 `capacity` 个元素的空队列
    ///
    /// A capacity of zero is allowed: such a queue is always both empty and full.
    ///
    /// 允许容量为零：这样的队列始终既为空又为满。
    ///
    /// # Examples
    ///
    /// ```
    /// use circqueue::RingQueue;
    ///
    /// // Inline slots (capacity ≤ 32)
    /// let small: RingQueue<u64, 32> = RingQueue::new(10);
    /// assert_eq!(small.capacity(), 10); // Exact, no rounding
    ///
    /// // Heap slots (capacity > 32)
    /// let large: RingQueue<u64, 32> = RingQueue::new(1000);
    /// assert_eq!(large.capacity(), 1000);
    ///
    /// let zero: RingQueue<u64> = RingQueue::new(0);
    /// assert!(zero.is_empty() && zero.is_full());
    /// ```
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            core: Mutex::new(RingCore::new(capacity)),
        }
    }

    /// Acquire the queue lock
    ///
    /// 获取队列锁
    ///
    /// The core is never left half-updated, so a guard poisoned by a panicking
    /// thread still protects a consistent state and is recovered.
    ///
    /// 核心状态从不处于半更新状态，因此被恐慌线程污染的锁仍保护着一致的状态，可直接恢复。
    #[inline]
    fn lock(&self) -> MutexGuard<'_, RingCore<T, N>> {
        self.core.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get the capacity of the queue
    ///
    /// 获取队列容量
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the number of elements currently in the queue
    ///
    /// 获取队列中当前的元素数量
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Get the number of elements that can still be enqueued
    ///
    /// 获取仍可入队的元素数量
    pub fn free_slots(&self) -> usize {
        self.lock().free_slots()
    }

    /// Check if the queue is empty
    ///
    /// 检查队列是否为空
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Check if the queue is full
    ///
    /// 检查队列是否已满
    pub fn is_full(&self) -> bool {
        self.lock().is_full()
    }

    /// Append an element at the rear of the queue
    ///
    /// 在队尾追加一个元素
    ///
    /// # Errors
    ///
    /// Returns `Err(CapacityExceeded(value))` if the queue is full. The queue is
    /// left exactly as it was and the value is handed back.
    ///
    /// # 错误
    ///
    /// 如果队列已满则返回 `Err(CapacityExceeded(value))`。队列保持原样，值被交还。
    ///
    /// # Examples
    ///
    /// ```
    /// use circqueue::{CapacityExceeded, RingQueue};
    ///
    /// let queue: RingQueue<&str> = RingQueue::new(1);
    /// assert_eq!(queue.enqueue("a"), Ok(()));
    /// assert_eq!(queue.enqueue("b"), Err(CapacityExceeded("b")));
    /// ```
    pub fn enqueue(&self, value: T) -> Result<(), CapacityExceeded<T>> {
        self.lock().enqueue(value)
    }

    /// Remove the front element, discarding it
    ///
    /// 移除队首元素并丢弃
    ///
    /// Use [`front`](Self::front) first to read it, or [`pop`](Self::pop) to
    /// take it in the same step.
    ///
    /// 如需读取，请先调用 [`front`](Self::front)，或使用 [`pop`](Self::pop) 一步取出。
    ///
    /// # Errors
    ///
    /// Returns `Err(QueueEmpty)` if the queue is empty.
    ///
    /// # 错误
    ///
    /// 如果队列为空则返回 `Err(QueueEmpty)`。
    pub fn dequeue(&self) -> Result<(), QueueEmpty> {
        self.lock().dequeue()
    }

    /// Remove the front element and return it
    ///
    /// 移除并返回队首元素
    ///
    /// Reading and removing happen under one lock acquisition, so no other
    /// thread can observe or take the element in between.
    ///
    /// 读取与移除在同一次加锁中完成，其他线程无法在其间观察或取走该元素。
    ///
    /// # Examples
    ///
    /// ```
    /// use circqueue::RingQueue;
    ///
    /// let queue: RingQueue<String> = RingQueue::new(4);
    /// queue.enqueue("job".to_string()).unwrap();
    /// assert_eq!(queue.pop().unwrap(), "job");
    /// assert!(queue.pop().is_err());
    /// ```
    pub fn pop(&self) -> Result<T, QueueEmpty> {
        self.lock().pop()
    }

    /// Drop every element in the queue
    ///
    /// drop 队列中的所有元素
    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl<T: Clone, const N: usize> RingQueue<T, N> {
    /// Get a copy of the oldest element without removing it
    ///
    /// 获取最旧元素的副本但不移除它
    ///
    /// # Errors
    ///
    /// Returns `Err(QueueEmpty)` if the queue is empty.
    ///
    /// # 错误
    ///
    /// 如果队列为空则返回 `Err(QueueEmpty)`。
    pub fn front(&self) -> Result<T, QueueEmpty> {
        self.lock().front().cloned()
    }

    /// Get a copy of the newest element without removing it
    ///
    /// 获取最新元素的副本但不移除它
    ///
    /// # Errors
    ///
    /// Returns `Err(QueueEmpty)` if the queue is empty.
    ///
    /// # 错误
    ///
    /// 如果队列为空则返回 `Err(QueueEmpty)`。
    pub fn rear(&self) -> Result<T, QueueEmpty> {
        self.lock().rear().cloned()
    }

    /// Copy the held elements, oldest first, in one consistent snapshot
    ///
    /// 以一次一致的快照复制所有持有的元素（从最旧开始）
    ///
    /// # Examples
    ///
    /// ```
    /// use circqueue::RingQueue;
    ///
    /// let queue: RingQueue<u8> = RingQueue::new(3);
    /// for v in [1, 2, 3] {
    ///     queue.enqueue(v).unwrap();
    /// }
    /// queue.dequeue().unwrap();
    /// queue.enqueue(4).unwrap();
    /// assert_eq!(queue.to_vec(), vec![2, 3, 4]);
    /// ```
    pub fn to_vec(&self) -> Vec<T> {
        self.lock().iter().cloned().collect()
    }
}

impl<T, const N: usize> Default for RingQueue<T, N> {
    /// Queue whose capacity equals the stack threshold `N`
    fn default() -> Self {
        Self::new(N)
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for RingQueue<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let core = self.lock();
        let items: Vec<&T> = core.iter().collect();
        f.debug_struct("RingQueue")
            .field("capacity", &self.capacity)
            .field("len", &core.len())
            .field("items", &items)
            .finish()
    }
}
