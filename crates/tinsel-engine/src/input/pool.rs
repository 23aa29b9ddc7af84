use super::types::PendingMotionEvent;

/// Free list of motion-event records.
///
/// Records are boxed so they can move between the shared queue and the
/// consumer's private batch without copying or reallocating; ownership of the
/// box is what guarantees a record is never referenced from two places.
#[derive(Debug, Default)]
pub struct EventPool {
    free: Vec<Box<PendingMotionEvent>>,
}

impl EventPool {
    /// Creates a pool pre-filled with `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut free = Vec::with_capacity(capacity);
        free.resize_with(capacity, Box::default);
        Self { free }
    }

    /// Pops a recycled record, or allocates when the pool is empty.
    pub fn acquire(&mut self, event: PendingMotionEvent) -> Box<PendingMotionEvent> {
        match self.free.pop() {
            Some(mut record) => {
                *record = event;
                record
            }
            None => Box::new(event),
        }
    }

    pub fn release(&mut self, record: Box<PendingMotionEvent>) {
        self.free.push(record);
    }

    pub fn release_all<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = Box<PendingMotionEvent>>,
    {
        for record in records {
            self.release(record);
        }
    }

    /// Number of records waiting for reuse.
    pub fn available(&self) -> usize {
        self.free.len()
    }
}
