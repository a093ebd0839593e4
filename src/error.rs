//! Queue operation errors
//!
//! 队列操作错误

use thiserror::Error;

/// Error for enqueue operations: the queue already holds `capacity` elements
///
/// enqueue 操作的错误：队列已包含 `capacity` 个元素
///
/// The rejected value is handed back so the caller can retry or route it elsewhere.
///
/// 被拒绝的值会被交还，以便调用者重试或另作处理。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("queue is full")]
pub struct CapacityExceeded<T>(pub T);

impl<T> CapacityExceeded<T> {
    /// Recover the value that could not be enqueued
    ///
    /// 取回未能入队的值
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

/// Error for dequeue, pop, front and rear: the queue holds no elements
///
/// dequeue、pop、front 和 rear 的错误：队列中没有元素
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("queue is empty")]
pub struct QueueEmpty;
