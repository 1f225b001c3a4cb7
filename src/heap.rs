/// `before(a, b)` returns true when `a` must sit strictly closer to the root
/// than `b`. A min-heap passes `a < b`, a max-heap passes `a > b`.
pub type Comparator<T> = fn(&T, &T) -> bool;

#[derive(Debug, PartialEq, Eq)]
pub enum HeapError {
    EmptyHeap,
}

impl std::fmt::Display for HeapError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            HeapError::EmptyHeap => write!(f, "heap is empty"),
        }
    }
}

impl std::error::Error for HeapError {}

/// Binary heap over a flat `Vec`. The element at index `i` has its parent at
/// `(i - 1) / 2` and its children at `2i + 1` and `2i + 2`; there are no node
/// objects. A single engine serves both orderings through the injected
/// comparator.
pub struct Heap<T> {
    data: Vec<T>,
    before: Comparator<T>,
}

impl<T> Heap<T>
where
    T: std::cmp::PartialOrd,
{
    pub fn min() -> Self {
        Self::with_comparator(|a, b| a < b)
    }

    pub fn max() -> Self {
        Self::with_comparator(|a, b| a > b)
    }

    pub fn min_from(data: Vec<T>) -> Self {
        Self::build(data, |a, b| a < b)
    }

    pub fn max_from(data: Vec<T>) -> Self {
        Self::build(data, |a, b| a > b)
    }
}

impl<T> Heap<T> {
    pub fn with_comparator(before: Comparator<T>) -> Self {
        Self {
            data: Vec::new(),
            before,
        }
    }

    /// Heapifies raw unordered data in O(n): sift-down from the last internal
    /// node back to the root.
    pub fn build(mut data: Vec<T>, before: Comparator<T>) -> Self {
        let l = data.len();
        for i in (0..l / 2).rev() {
            Self::sift_down(&mut data, i, l, before);
        }
        Self { data, before }
    }

    /// O(log n) amortized.
    pub fn insert(&mut self, value: T) {
        self.data.push(value);
        let last = self.data.len() - 1;
        Self::sift_up(&mut self.data, last, self.before);
    }

    /// Removes and returns the root. The last element takes the root's slot
    /// and sinks back to its place. O(log n).
    pub fn extract(&mut self) -> Result<T, HeapError> {
        match self.data.len() {
            0 => Err(HeapError::EmptyHeap),
            1 => Ok(self.data.swap_remove(0)),
            l => {
                let root = self.data.swap_remove(0);
                Self::sift_down(&mut self.data, 0, l - 1, self.before);
                Ok(root)
            }
        }
    }

    pub fn peek(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::EmptyHeap)
    }

    /// O(n) full scan of the heap property. Testing aid, not for the hot
    /// path.
    pub fn validate(&self) -> bool {
        let l = self.data.len();
        for i in 0..l {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            if left < l && (self.before)(&self.data[left], &self.data[i]) {
                return false;
            }
            if right < l && (self.before)(&self.data[right], &self.data[i]) {
                return false;
            }
        }
        true
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Sinks `data[start]` within the live range `[0, end)`. The right child
    /// wins over the left only when strictly more extreme, and a swap happens
    /// only when the child is strictly more extreme than the parent; ties
    /// stop the walk, which bounds it even on all-equal data.
    pub(crate) fn sift_down(data: &mut [T], start: usize, end: usize, before: Comparator<T>) {
        let mut i = start;
        loop {
            let left = 2 * i + 1;
            if left >= end {
                return;
            }
            let mut child = left;
            let right = left + 1;
            if right < end && before(&data[right], &data[left]) {
                child = right;
            }
            if !before(&data[child], &data[i]) {
                return;
            }
            data.swap(i, child);
            i = child;
        }
    }

    /// Floats `data[start]` toward the root while it is strictly more extreme
    /// than its parent.
    fn sift_up(data: &mut [T], start: usize, before: Comparator<T>) {
        let mut i = start;
        while i > 0 {
            let parent = (i - 1) / 2;
            if !before(&data[i], &data[parent]) {
                return;
            }
            data.swap(i, parent);
            i = parent;
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self.data)?;
        Ok(())
    }
}
