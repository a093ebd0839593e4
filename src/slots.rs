//! Fixed-length slot storage with stack/heap optimization
//!
//! 固定长度的槽位存储，带有栈/堆优化
//!
//! Slots live inline (on the stack, or wherever the owning value lives) when
//! `capacity ≤ N`, and in a single boxed slice otherwise. The length never
//! changes after construction.
//!
//! 当 `capacity ≤ N` 时槽位内联存储（栈上），否则存储在一个堆分配的切片中。
//! 构造后长度不再改变。

/// Fixed-length slot store
///
/// 固定长度的槽位存储
///
/// # Type Parameters
/// - `T`: Element type
/// - `N`: Stack capacity threshold (slots stored inline when capacity ≤ N)
///
/// # 类型参数
/// - `T`: 元素类型
/// - `N`: 栈容量阈值（当容量 ≤ N 时槽位内联存储）
pub struct Slots<T, const N: usize> {
    /// Storage backend
    ///
    /// 存储后端
    storage: Storage<T, N>,

    /// Number of usable slots
    ///
    /// 可用槽位数量
    capacity: usize,
}

/// Storage backend - either inline or heap
///
/// 存储后端 - 内联或堆
enum Storage<T, const N: usize> {
    /// Inline storage for capacity ≤ N; only the first `capacity` slots are used
    ///
    /// 容量 ≤ N 时的内联存储；仅使用前 `capacity` 个槽位
    Stack([Option<T>; N]),

    /// Heap storage for capacity > N
    ///
    /// 容量 > N 时的堆存储
    Heap(Box<[Option<T>]>),
}

impl<T, const N: usize> Slots<T, N> {
    /// Create a store of exactly `capacity` vacant slots
    ///
    /// 创建恰好 `capacity` 个空槽位的存储
    ///
    /// If `capacity` ≤ N, uses inline storage.
    /// If `capacity` > N, allocates once on the heap.
    ///
    /// 如果 `capacity` ≤ N，使用内联存储。
    /// 如果 `capacity` > N，在堆上一次性分配。
    pub fn with_capacity(capacity: usize) -> Self {
        let storage = if capacity <= N {
            Storage::Stack(std::array::from_fn(|_| None))
        } else {
            Storage::Heap((0..capacity).map(|_| None).collect())
        };

        Self { storage, capacity }
    }

    /// Get the number of slots
    ///
    /// 获取槽位数量
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    fn as_slice(&self) -> &[Option<T>] {
        match &self.storage {
            Storage::Stack(arr) => &arr[..self.capacity],
            Storage::Heap(boxed) => &boxed[..],
        }
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [Option<T>] {
        match &mut self.storage {
            Storage::Stack(arr) => &mut arr[..self.capacity],
            Storage::Heap(boxed) => &mut boxed[..],
        }
    }

    /// Store `value` at `index`, returning whatever the slot held before
    ///
    /// 将 `value` 存入 `index` 处，并返回该槽位之前的内容
    ///
    /// # Panics
    /// Panics if `index >= capacity`.
    ///
    /// # 恐慌
    /// 如果 `index >= capacity` 则恐慌。
    #[inline]
    pub fn put(&mut self, index: usize, value: T) -> Option<T> {
        self.as_mut_slice()[index].replace(value)
    }

    /// Move the value out of the slot at `index`, leaving it vacant
    ///
    /// 将 `index` 处槽位中的值移出，使其变为空
    ///
    /// # Panics
    /// Panics if `index >= capacity`.
    ///
    /// # 恐慌
    /// 如果 `index >= capacity` 则恐慌。
    #[inline]
    pub fn take(&mut self, index: usize) -> Option<T> {
        self.as_mut_slice()[index].take()
    }

    /// Borrow the value in the slot at `index`, if occupied
    ///
    /// 借用 `index` 处槽位中的值（如果已占用）
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index).and_then(Option::as_ref)
    }

    /// Vacate every slot, dropping held values
    ///
    /// 清空所有槽位，drop 其中的值
    pub fn clear(&mut self) {
        self.as_mut_slice().iter_mut().for_each(|slot| *slot = None);
    }

    #[cfg(test)]
    fn is_inline(&self) -> bool {
        matches!(self.storage, Storage::Stack(_))
    }
}
