//! Core ring indexing - the unsynchronized queue state
//!
//! 核心环形索引 - 无同步的队列状态
//!
//! `RingCore` owns the `(store, head, count)` triple and every piece of
//! wraparound arithmetic. It takes `&mut self` for mutation and is never shared
//! directly; `RingQueue` puts it behind a single lock.
//!
//! `RingCore` 持有 `(store, head, count)` 三元组及全部环绕运算。
//! 它通过 `&mut self` 修改状态，从不直接共享；`RingQueue` 将其置于单个锁之后。
//!
//! Logical position `i` (for `i < count`) lives in physical slot
//! `(head + i) % capacity`. Every physical index is reduced modulo capacity,
//! including the write index in `enqueue` and the last index in `rear`.
//!
//! 逻辑位置 `i`（`i < count`）位于物理槽位 `(head + i) % capacity`。
//! 所有物理索引都对容量取模，包括 `enqueue` 的写入索引和 `rear` 的末尾索引。

use crate::error::{CapacityExceeded, QueueEmpty};
use crate::slots::Slots;

/// Core ring queue state
///
/// 核心环形队列状态
///
/// # Type Parameters
/// - `T`: Element type
/// - `N`: Stack capacity threshold (slots stored inline when capacity ≤ N)
///
/// # 类型参数
/// - `T`: 元素类型
/// - `N`: 栈容量阈值（当容量 ≤ N 时槽位内联存储）
pub struct RingCore<T, const N: usize> {
    /// Slot storage, exactly `capacity` slots
    ///
    /// 槽位存储，恰好 `capacity` 个槽位
    slots: Slots<T, N>,

    /// Physical index of the oldest element
    ///
    /// 最旧元素的物理索引
    head: usize,

    /// Number of elements held
    ///
    /// 当前持有的元素数量
    count: usize,
}

impl<T, const N: usize> RingCore<T, N> {
    /// Create an empty core with exactly `capacity` slots
    ///
    /// 创建恰好 `capacity` 个槽位的空核心
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Slots::with_capacity(capacity),
            head: 0,
            count: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    #[inline]
    pub fn free_slots(&self) -> usize {
        self.capacity() - self.count
    }

    /// Map a logical offset from the head to its physical slot
    ///
    /// 将相对于 head 的逻辑偏移映射到物理槽位
    ///
    /// Only called with `capacity > 0` and `offset <= capacity`, so the sum
    /// stays below `2 * capacity`.
    ///
    /// 仅在 `capacity > 0` 且 `offset <= capacity` 时调用，因此和小于 `2 * capacity`。
    #[inline]
    fn slot_of(&self, offset: usize) -> usize {
        (self.head + offset) % self.capacity()
    }

    /// Append `value` at the rear
    ///
    /// 在队尾追加 `value`
    ///
    /// # Errors
    ///
    /// Returns `CapacityExceeded(value)` if `count == capacity`; state is untouched.
    ///
    /// # 错误
    ///
    /// 如果 `count == capacity` 则返回 `CapacityExceeded(value)`；状态不变。
    pub fn enqueue(&mut self, value: T) -> Result<(), CapacityExceeded<T>> {
        if self.is_full() {
            return Err(CapacityExceeded(value));
        }

        let index = self.slot_of(self.count);
        self.slots.put(index, value);
        self.count += 1;
        Ok(())
    }

    /// Remove the front element and return it
    ///
    /// 移除队首元素并返回
    pub fn pop(&mut self) -> Result<T, QueueEmpty> {
        if self.is_empty() {
            return Err(QueueEmpty);
        }

        // Occupied slots always hold a value; a vacant head leaves state as is.
        let value = self.slots.take(self.head).ok_or(QueueEmpty)?;
        self.head = self.slot_of(1);
        self.count -= 1;
        Ok(value)
    }

    /// Remove the front element, dropping it
    ///
    /// 移除队首元素并将其 drop
    #[inline]
    pub fn dequeue(&mut self) -> Result<(), QueueEmpty> {
        self.pop().map(drop)
    }

    /// Borrow the oldest element
    ///
    /// 借用最旧的元素
    pub fn front(&self) -> Result<&T, QueueEmpty> {
        if self.is_empty() {
            return Err(QueueEmpty);
        }
        self.slots.get(self.head).ok_or(QueueEmpty)
    }

    /// Borrow the newest element
    ///
    /// 借用最新的元素
    pub fn rear(&self) -> Result<&T, QueueEmpty> {
        if self.is_empty() {
            return Err(QueueEmpty);
        }
        self.slots.get(self.slot_of(self.count - 1)).ok_or(QueueEmpty)
    }

    /// Drop every element and reset to the initial state
    ///
    /// drop 所有元素并重置为初始状态
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = 0;
        self.count = 0;
    }

    /// Iterate over held elements from oldest to newest
    ///
    /// 从最旧到最新遍历持有的元素
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.count).filter_map(move |offset| self.slots.get(self.slot_of(offset)))
    }

    #[cfg(test)]
    pub(crate) fn head(&self) -> usize {
        self.head
    }
}
