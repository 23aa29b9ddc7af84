use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::coords::Vec2;

use super::points::PointCache;
use super::pool::EventPool;
use super::types::{MotionKind, PendingMotionEvent, PointerId, TouchAction, TouchBatch};

/// Producer-owned state, only touched under the queue lock.
#[derive(Debug)]
struct Shared {
    queue: Vec<Box<PendingMotionEvent>>,
    events: EventPool,
    points: PointCache,
}

impl Shared {
    fn push(&mut self, kind: MotionKind, pointer: PointerId, pos: Vec2, delta: Vec2) {
        let record = self.events.acquire(PendingMotionEvent { kind, pointer, pos, delta });
        self.queue.push(record);
    }

    fn track_move(&mut self, pointer: PointerId, pos: Vec2) {
        // First sample of an untracked pointer yields a zero delta.
        let last = self.points.last_or(pointer, pos);
        self.push(MotionKind::Move, pointer, pos, pos - last);
        self.points.set(pointer, pos);
    }

    fn track_down(&mut self, pointer: PointerId, pos: Vec2) {
        self.points.set(pointer, pos);
        self.push(MotionKind::Down, pointer, pos, Vec2::ZERO);
    }

    fn track_up(&mut self, pointer: PointerId, pos: Vec2) {
        self.points.forget(pointer);
        self.push(MotionKind::Up, pointer, pos, Vec2::ZERO);
    }
}

/// Consumer-private buffer holding the events of one drain.
///
/// Swapped with the shared queue on drain, so neither side reallocates once both
/// buffers have grown to the peak batch size.
#[derive(Debug, Default)]
pub struct MotionBatch {
    events: Vec<Box<PendingMotionEvent>>,
}

impl MotionBatch {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { events: Vec::with_capacity(capacity) }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PendingMotionEvent> {
        self.events.iter().map(|e| &**e)
    }
}

/// Pointer event exchange between an input thread and the frame loop.
///
/// The producer calls [`enqueue`](Self::enqueue) / [`enqueue_batch`](Self::enqueue_batch);
/// the consumer calls [`drain`](Self::drain), dispatches outside the lock, then
/// [`recycle`](Self::recycle)s the batch. [`process`](Self::process) bundles the
/// consumer steps.
///
/// `has_events` is the only state read without the lock. It is raised with a
/// release store after the producer's push and checked with an acquire load, so
/// a consumer that sees `false` can at worst miss events pushed after its check;
/// they are picked up on the next frame. It is only ever lowered under the lock.
#[derive(Debug)]
pub struct MotionEventQueue {
    shared: Mutex<Shared>,
    has_events: AtomicBool,
}

impl MotionEventQueue {
    pub fn new(event_capacity: usize, point_capacity: usize) -> Self {
        Self {
            shared: Mutex::new(Shared {
                queue: Vec::with_capacity(event_capacity),
                events: EventPool::with_capacity(event_capacity),
                points: PointCache::with_capacity(point_capacity),
            }),
            has_events: AtomicBool::new(false),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Shared> {
        // Every critical section moves whole records, so a panic elsewhere cannot
        // leave the shared state half-written.
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Queues a single pointer event. Producer side.
    ///
    /// `Down` starts tracking the pointer, `Move` carries the delta from the last
    /// tracked position, `Up` stops tracking (a no-op for unknown pointers; the
    /// event is still queued).
    pub fn enqueue(&self, kind: MotionKind, pointer: PointerId, pos: Vec2) {
        let mut shared = self.lock();
        match kind {
            MotionKind::Down => shared.track_down(pointer, pos),
            MotionKind::Move => shared.track_move(pointer, pos),
            MotionKind::Up => shared.track_up(pointer, pos),
        }
        self.has_events.store(true, Ordering::Release);
    }

    /// Queues one multi-touch report. Producer side.
    ///
    /// Emits a `Move` for every pointer in scan order, then the `Down`/`Up` the
    /// action describes. A `Cancel` ends every pointer of the batch.
    pub fn enqueue_batch(&self, batch: TouchBatch<'_>) {
        let mut shared = self.lock();
        let before = shared.queue.len();

        // Cancel must know which pointers were down before the moves below
        // start tracking them.
        let was_tracked: Vec<bool> = match batch.action {
            TouchAction::Cancel => batch.pointers.iter().map(|p| shared.points.contains(p.id)).collect(),
            _ => Vec::new(),
        };

        for p in batch.pointers {
            shared.track_move(p.id, p.pos);
        }

        match batch.action {
            TouchAction::Move => {}
            TouchAction::Down { index } => match batch.pointers.get(index) {
                Some(p) => shared.track_down(p.id, p.pos),
                None => log::debug!("touch down index {index} out of range ({} pointers)", batch.pointers.len()),
            },
            TouchAction::Up { index } => match batch.pointers.get(index) {
                Some(p) => shared.track_up(p.id, p.pos),
                None => log::debug!("touch up index {index} out of range ({} pointers)", batch.pointers.len()),
            },
            TouchAction::Cancel => {
                for (p, &tracked) in batch.pointers.iter().zip(&was_tracked) {
                    if tracked {
                        shared.track_up(p.id, p.pos);
                    } else {
                        shared.points.forget(p.id);
                    }
                }
            }
        }

        if shared.queue.len() > before {
            self.has_events.store(true, Ordering::Release);
        }
    }

    /// Cheap unlocked check for queued events. Consumer side.
    #[inline]
    pub fn has_pending(&self) -> bool {
        self.has_events.load(Ordering::Acquire)
    }

    /// Moves every queued event into `batch`, in enqueue order. Consumer side.
    ///
    /// Returns the number of events now in `batch`.
    pub fn drain(&self, batch: &mut MotionBatch) -> usize {
        if !self.has_pending() {
            return batch.len();
        }

        let mut shared = self.lock();
        if batch.events.is_empty() {
            std::mem::swap(&mut shared.queue, &mut batch.events);
        } else {
            batch.events.append(&mut shared.queue);
        }
        self.has_events.store(false, Ordering::Release);
        batch.len()
    }

    /// Returns the records of a dispatched batch to the pool. Consumer side.
    pub fn recycle(&self, batch: &mut MotionBatch) {
        if batch.events.is_empty() {
            return;
        }
        let mut shared = self.lock();
        shared.events.release_all(batch.events.drain(..));
    }

    /// Drains, calls `dispatch` for every event with the lock released, then
    /// recycles. Returns the number of dispatched events.
    pub fn process<F>(&self, batch: &mut MotionBatch, mut dispatch: F) -> usize
    where
        F: FnMut(&PendingMotionEvent),
    {
        let n = self.drain(batch);
        if n == 0 {
            return 0;
        }
        for event in batch.iter() {
            dispatch(event);
        }
        self.recycle(batch);
        n
    }

    /// Last queued position of a pointer that is currently down.
    pub fn last_position(&self, pointer: PointerId) -> Option<Vec2> {
        self.lock().points.get(pointer)
    }

    pub fn tracked_pointers(&self) -> usize {
        self.lock().points.len()
    }

    /// Number of events waiting for the next drain.
    pub fn queued(&self) -> usize {
        self.lock().queue.len()
    }

    /// Number of pooled records ready for reuse.
    pub fn pooled(&self) -> usize {
        self.lock().events.available()
    }
}

impl Default for MotionEventQueue {
    fn default() -> Self {
        Self::new(32, 10)
    }
}

/// Producer-side handle to a [`MotionEventQueue`].
///
/// Cheap to clone and `Send`; hand one to the input thread.
#[derive(Debug, Clone)]
pub struct InputHandle {
    queue: Arc<MotionEventQueue>,
}

impl InputHandle {
    pub(crate) fn new(queue: Arc<MotionEventQueue>) -> Self {
        Self { queue }
    }

    pub fn pointer_down(&self, pointer: PointerId, x: f32, y: f32) {
        self.queue.enqueue(MotionKind::Down, pointer, Vec2::new(x, y));
    }

    pub fn pointer_move(&self, pointer: PointerId, x: f32, y: f32) {
        self.queue.enqueue(MotionKind::Move, pointer, Vec2::new(x, y));
    }

    pub fn pointer_up(&self, pointer: PointerId, x: f32, y: f32) {
        self.queue.enqueue(MotionKind::Up, pointer, Vec2::new(x, y));
    }

    pub fn touch_batch(&self, batch: TouchBatch<'_>) {
        self.queue.enqueue_batch(batch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::TouchPoint;

    fn drain_all(q: &MotionEventQueue) -> Vec<PendingMotionEvent> {
        let mut batch = MotionBatch::default();
        let mut out = Vec::new();
        q.process(&mut batch, |e| out.push(*e));
        out
    }

    fn v(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    // ── single events ─────────────────────────────────────────────────────

    #[test]
    fn down_move_up_scenario() {
        let q = MotionEventQueue::default();
        let id = PointerId(1);
        q.enqueue(MotionKind::Down, id, v(10.0, 10.0));
        q.enqueue(MotionKind::Move, id, v(15.0, 12.0));
        q.enqueue(MotionKind::Up, id, v(15.0, 12.0));

        let events = drain_all(&q);
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].kind, MotionKind::Down);
        assert_eq!(events[0].delta, Vec2::ZERO);
        assert_eq!(events[1].kind, MotionKind::Move);
        assert_eq!(events[1].delta, v(5.0, 2.0));
        assert_eq!(events[2].kind, MotionKind::Up);
        assert_eq!(events[2].delta, Vec2::ZERO);
        assert_eq!(q.last_position(id), None);
        assert_eq!(q.tracked_pointers(), 0);
    }

    #[test]
    fn first_move_of_untracked_pointer_has_zero_delta() {
        let q = MotionEventQueue::default();
        let id = PointerId(4);
        q.enqueue(MotionKind::Move, id, v(50.0, 60.0));
        q.enqueue(MotionKind::Move, id, v(52.0, 57.0));
        q.enqueue(MotionKind::Move, id, v(52.0, 50.0));

        let deltas: Vec<Vec2> = drain_all(&q).iter().map(|e| e.delta).collect();
        assert_eq!(deltas, vec![Vec2::ZERO, v(2.0, -3.0), v(0.0, -7.0)]);
    }

    #[test]
    fn down_after_up_starts_fresh_gesture() {
        let q = MotionEventQueue::default();
        let id = PointerId(2);
        q.enqueue(MotionKind::Down, id, v(0.0, 0.0));
        q.enqueue(MotionKind::Move, id, v(100.0, 100.0));
        q.enqueue(MotionKind::Up, id, v(100.0, 100.0));
        q.enqueue(MotionKind::Down, id, v(5.0, 5.0));
        q.enqueue(MotionKind::Move, id, v(6.0, 5.0));

        let events = drain_all(&q);
        assert_eq!(events[3].kind, MotionKind::Down);
        assert_eq!(events[3].delta, Vec2::ZERO);
        assert_eq!(events[4].delta, v(1.0, 0.0));
    }

    #[test]
    fn up_for_unknown_pointer_is_queued_without_tracking() {
        let q = MotionEventQueue::default();
        q.enqueue(MotionKind::Up, PointerId(9), v(1.0, 1.0));
        assert_eq!(q.tracked_pointers(), 0);

        let events = drain_all(&q);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, MotionKind::Up);
    }

    #[test]
    fn pointers_are_tracked_independently() {
        let q = MotionEventQueue::default();
        q.enqueue(MotionKind::Down, PointerId(1), v(0.0, 0.0));
        q.enqueue(MotionKind::Down, PointerId(2), v(100.0, 0.0));
        q.enqueue(MotionKind::Move, PointerId(1), v(1.0, 0.0));
        q.enqueue(MotionKind::Move, PointerId(2), v(90.0, 0.0));

        let events = drain_all(&q);
        assert_eq!(events[2].delta, v(1.0, 0.0));
        assert_eq!(events[3].delta, v(-10.0, 0.0));
    }

    // ── batches ───────────────────────────────────────────────────────────

    #[test]
    fn batch_emits_moves_in_scan_order_then_action() {
        let q = MotionEventQueue::default();
        let pointers = [TouchPoint::new(7, 1.0, 1.0), TouchPoint::new(3, 2.0, 2.0)];
        q.enqueue_batch(TouchBatch { action: TouchAction::Down { index: 1 }, pointers: &pointers });

        let events = drain_all(&q);
        let summary: Vec<(MotionKind, u64)> = events.iter().map(|e| (e.kind, e.pointer.0)).collect();
        assert_eq!(
            summary,
            vec![(MotionKind::Move, 7), (MotionKind::Move, 3), (MotionKind::Down, 3)]
        );
        assert!(events.iter().all(|e| e.delta == Vec2::ZERO));
    }

    #[test]
    fn batch_up_forgets_only_the_action_pointer() {
        let q = MotionEventQueue::default();
        let down = [TouchPoint::new(1, 0.0, 0.0), TouchPoint::new(2, 10.0, 10.0)];
        q.enqueue_batch(TouchBatch { action: TouchAction::Move, pointers: &down });

        let moved = [TouchPoint::new(1, 3.0, 4.0), TouchPoint::new(2, 12.0, 10.0)];
        q.enqueue_batch(TouchBatch { action: TouchAction::Up { index: 1 }, pointers: &moved });

        let events = drain_all(&q);
        let last = events.last().copied().unwrap();
        assert_eq!(last.kind, MotionKind::Up);
        assert_eq!(last.pointer, PointerId(2));
        assert_eq!(last.pos, v(12.0, 10.0));
        assert_eq!(events[2].delta, v(3.0, 4.0));
        assert_eq!(events[3].delta, v(2.0, 0.0));
        assert_eq!(q.last_position(PointerId(1)), Some(v(3.0, 4.0)));
        assert_eq!(q.last_position(PointerId(2)), None);
    }

    #[test]
    fn batch_cancel_ends_only_pointers_that_were_down() {
        let q = MotionEventQueue::default();
        q.enqueue(MotionKind::Down, PointerId(1), v(0.0, 0.0));
        drain_all(&q);

        let pointers = [TouchPoint::new(1, 2.0, 0.0), TouchPoint::new(5, 5.0, 5.0)];
        q.enqueue_batch(TouchBatch { action: TouchAction::Cancel, pointers: &pointers });

        let events = drain_all(&q);
        let kinds: Vec<(MotionKind, PointerId)> = events.iter().map(|e| (e.kind, e.pointer)).collect();
        assert_eq!(
            kinds,
            vec![
                (MotionKind::Move, PointerId(1)),
                (MotionKind::Move, PointerId(5)),
                (MotionKind::Up, PointerId(1)),
            ]
        );
        assert_eq!(q.tracked_pointers(), 0);
    }

    #[test]
    fn cancel_of_untracked_pointer_emits_no_up() {
        let q = MotionEventQueue::default();
        let pointers = [TouchPoint::new(5, 1.0, 1.0)];
        q.enqueue_batch(TouchBatch { action: TouchAction::Cancel, pointers: &pointers });

        let kinds: Vec<MotionKind> = drain_all(&q).iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![MotionKind::Move]);
        assert_eq!(q.last_position(PointerId(5)), None);
    }

    #[test]
    fn out_of_range_action_index_only_emits_moves() {
        let q = MotionEventQueue::default();
        let pointers = [TouchPoint::new(1, 0.0, 0.0)];
        q.enqueue_batch(TouchBatch { action: TouchAction::Down { index: 4 }, pointers: &pointers });

        let events = drain_all(&q);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, MotionKind::Move);
    }

    #[test]
    fn empty_batch_does_not_raise_flag() {
        let q = MotionEventQueue::default();
        q.enqueue_batch(TouchBatch { action: TouchAction::Cancel, pointers: &[] });
        assert!(!q.has_pending());
    }

    // ── drain / recycle ───────────────────────────────────────────────────

    #[test]
    fn drain_without_events_is_a_noop() {
        let q = MotionEventQueue::default();
        let mut batch = MotionBatch::default();
        assert!(!q.has_pending());
        assert_eq!(q.drain(&mut batch), 0);
    }

    #[test]
    fn drain_lowers_flag_and_empties_queue() {
        let q = MotionEventQueue::default();
        q.enqueue(MotionKind::Down, PointerId(1), v(0.0, 0.0));
        assert!(q.has_pending());

        let mut batch = MotionBatch::default();
        assert_eq!(q.drain(&mut batch), 1);
        assert!(!q.has_pending());
        assert_eq!(q.queued(), 0);

        // Events queued after the swap go to the next drain.
        q.enqueue(MotionKind::Move, PointerId(1), v(1.0, 0.0));
        assert_eq!(batch.len(), 1);
        assert_eq!(q.queued(), 1);
    }

    #[test]
    fn undispatched_batch_is_appended_not_lost() {
        let q = MotionEventQueue::default();
        let mut batch = MotionBatch::default();
        q.enqueue(MotionKind::Down, PointerId(1), v(0.0, 0.0));
        q.drain(&mut batch);
        q.enqueue(MotionKind::Up, PointerId(1), v(0.0, 0.0));
        assert_eq!(q.drain(&mut batch), 2);

        let kinds: Vec<MotionKind> = batch.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![MotionKind::Down, MotionKind::Up]);
    }

    #[test]
    fn recycled_records_return_to_pool() {
        let q = MotionEventQueue::new(0, 0);
        for i in 0..5 {
            q.enqueue(MotionKind::Move, PointerId(1), v(i as f32, 0.0));
        }
        assert_eq!(q.pooled(), 0);

        let mut batch = MotionBatch::default();
        assert_eq!(q.process(&mut batch, |_| {}), 5);
        assert!(batch.is_empty());
        assert_eq!(q.pooled(), 5);

        q.enqueue(MotionKind::Move, PointerId(1), v(9.0, 0.0));
        assert_eq!(q.pooled(), 4);
    }

    // ── concurrency ───────────────────────────────────────────────────────

    #[test]
    fn concurrent_producers_lose_and_reorder_nothing() {
        const PRODUCERS: u64 = 4;
        const PER_PRODUCER: usize = 500;

        let q = Arc::new(MotionEventQueue::default());
        let handles: Vec<_> = (0..PRODUCERS)
            .map(|p| {
                let input = InputHandle::new(Arc::clone(&q));
                std::thread::spawn(move || {
                    for i in 0..PER_PRODUCER {
                        input.pointer_move(PointerId(p), i as f32, 0.0);
                    }
                })
            })
            .collect();

        let mut batch = MotionBatch::default();
        let mut seen: Vec<Vec<f32>> = vec![Vec::new(); PRODUCERS as usize];
        let total = PRODUCERS as usize * PER_PRODUCER;
        let mut received = 0;
        while received < total {
            received += q.process(&mut batch, |e| seen[e.pointer.0 as usize].push(e.pos.x));
            std::thread::yield_now();
        }
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(q.queued(), 0);
        for xs in seen {
            let expected: Vec<f32> = (0..PER_PRODUCER).map(|i| i as f32).collect();
            assert_eq!(xs, expected);
        }
    }
}
