use crate::heap::Heap;

#[derive(Debug, PartialEq, Eq)]
pub enum QueueError {
    EmptyQueue,
}

impl std::fmt::Display for QueueError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            QueueError::EmptyQueue => write!(f, "queue is empty"),
        }
    }
}

impl std::error::Error for QueueError {}

/// Payload carried through the heap next to its orderable key. The heap
/// comparator looks only at `priority`; the payload never takes part in
/// ordering.
pub struct PriorityItem<T, P> {
    pub payload: T,
    pub priority: P,
}

impl<T: std::fmt::Debug, P: std::fmt::Debug> std::fmt::Debug for PriorityItem<T, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({:?}, priority: {:?})", self.payload, self.priority)?;
        Ok(())
    }
}

/// Min-heap keyed queue: a lower priority value dequeues first. Items with
/// equal priorities come out in heap-layout order, not insertion order.
pub struct PriorityQueue<T, P>
where
    P: std::cmp::PartialOrd,
{
    heap: Heap<PriorityItem<T, P>>,
}

impl<T, P> PriorityQueue<T, P>
where
    P: std::cmp::PartialOrd,
{
    pub fn new() -> Self {
        Self {
            heap: Heap::with_comparator(|a, b| a.priority < b.priority),
        }
    }

    /// O(log n).
    pub fn enqueue(&mut self, payload: T, priority: P) {
        self.heap.insert(PriorityItem { payload, priority });
    }

    /// Removes the highest-precedence item and returns its payload; the
    /// priority is consumed. O(log n).
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        self.heap
            .extract()
            .map(|item| item.payload)
            .map_err(|_| QueueError::EmptyQueue)
    }

    /// Payload and priority of the highest-precedence item, no removal.
    /// O(1).
    pub fn peek(&self) -> Result<(&T, &P), QueueError> {
        self.heap
            .peek()
            .map(|item| (&item.payload, &item.priority))
            .map_err(|_| QueueError::EmptyQueue)
    }

    pub fn size(&self) -> usize {
        self.heap.size()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<T, P> Default for PriorityQueue<T, P>
where
    P: std::cmp::PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{PriorityQueue, QueueError};

    #[test]
    fn test_dequeue_order() {
        let mut queue = PriorityQueue::new();
        queue.enqueue("a", 3);
        queue.enqueue("b", 2);
        queue.enqueue("c", 4);
        queue.enqueue("d", 1);

        assert_eq!(Ok("d"), queue.dequeue());
        assert_eq!(Ok("b"), queue.dequeue());
        assert_eq!(Ok("a"), queue.dequeue());
        assert_eq!(Ok("c"), queue.dequeue());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_peek_does_not_remove() {
        let mut queue = PriorityQueue::new();
        queue.enqueue("low", 9);
        queue.enqueue("high", 1);

        assert_eq!(Ok((&"high", &1)), queue.peek());
        assert_eq!(Ok((&"high", &1)), queue.peek());
        assert_eq!(2, queue.size());
    }

    #[test]
    fn test_empty_queue_errors() {
        let mut queue: PriorityQueue<&str, i32> = PriorityQueue::new();
        assert_eq!(Err(QueueError::EmptyQueue), queue.dequeue());
        assert_eq!(Err(QueueError::EmptyQueue), queue.peek());
        assert_eq!(0, queue.size());
    }

    #[test]
    fn test_equal_priorities_drain_in_priority_order() {
        let mut queue = PriorityQueue::new();
        let tasks = [
            ("brush teeth", 3),
            ("have breakfast", 2),
            ("check mail", 4),
            ("morning exercise", 1),
            ("take a shower", 2),
            ("get ready for work", 3),
        ];
        for (task, priority) in tasks {
            queue.enqueue(task, priority);
        }

        // equal priorities have no guaranteed relative order, so only the
        // priority sequence is asserted
        let mut priorities = Vec::new();
        while !queue.is_empty() {
            let (_, &priority) = queue.peek().unwrap();
            priorities.push(priority);
            queue.dequeue().unwrap();
        }
        assert_eq!(vec![1, 2, 2, 3, 3, 4], priorities);
    }

    #[test]
    fn test_clear() {
        let mut queue = PriorityQueue::new();
        queue.enqueue("x", 1);
        queue.enqueue("y", 2);
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(Err(QueueError::EmptyQueue), queue.dequeue());
    }

    #[test]
    fn test_reuse_after_drain() {
        let mut queue = PriorityQueue::new();
        queue.enqueue(10, 1.5);
        assert_eq!(Ok(10), queue.dequeue());
        assert_eq!(Err(QueueError::EmptyQueue), queue.dequeue());

        queue.enqueue(20, 0.5);
        queue.enqueue(30, 2.0);
        assert_eq!(Ok(20), queue.dequeue());
        assert_eq!(Ok(30), queue.dequeue());
    }
}
