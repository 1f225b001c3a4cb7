pub mod heap;
pub mod heapsort;
pub mod priority_queue;
