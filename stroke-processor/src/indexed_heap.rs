//--------------------------------------------------------------------
// indexed_heap.rs
//--------------------------------------------------------------------
// Provides a binary min-heap over integer handles which keeps track
// of the position of each handle, so that the priority of an item
// can be changed from outside and the heap order restored in place
//--------------------------------------------------------------------

use std::cmp::Ordering;

pub struct IndexedHeap {
    heap: Vec<usize>,
    positions: Box<[Option<usize>]>
}

// All operations take the comparator by argument: the priorities live
// with the caller, which is free to mutate them between calls
impl IndexedHeap {
    // Handles must be in the range 0..capacity
    pub fn new(capacity: usize) -> IndexedHeap {
        let heap = Vec::with_capacity(capacity);
        let positions = vec![None; capacity].into_boxed_slice();
        IndexedHeap { heap, positions }
    }

    pub fn len(&self) -> usize { self.heap.len() }
    pub fn is_empty(&self) -> bool { self.heap.is_empty() }
    pub fn capacity(&self) -> usize { self.positions.len() }

    pub fn contains(&self, item: usize) -> bool {
        self.positions.get(item).map_or(false, |p| p.is_some())
    }

    pub fn insert<F>(&mut self, item: usize, cmp: F) where F: Fn(usize, usize) -> Ordering {
        assert!(item < self.capacity(), "handle {} out of the heap range", item);
        assert!(!self.contains(item), "handle {} is already queued", item);

        let i = self.heap.len();
        self.heap.push(item);
        self.positions[item] = Some(i);
        self.sift_up(i, &cmp);
    }

    pub fn pop_min<F>(&mut self, cmp: F) -> Option<usize> where F: Fn(usize, usize) -> Ordering {
        if self.heap.is_empty() { return None; }

        let last = self.heap.len() - 1;
        self.swap(0, last);
        let item = self.heap.pop()?;
        self.positions[item] = None;

        if !self.heap.is_empty() { self.sift_down(0, &cmp); }
        Some(item)
    }

    // The priority of the item was changed by the caller, restore the order
    pub fn reheapify<F>(&mut self, item: usize, cmp: F) where F: Fn(usize, usize) -> Ordering {
        let i = match self.positions.get(item).copied().flatten() {
            Some(i) => i,
            None => panic!("handle {} is not queued", item)
        };

        let i = self.sift_up(i, &cmp);
        self.sift_down(i, &cmp);
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.positions[self.heap[i]] = Some(i);
        self.positions[self.heap[j]] = Some(j);
    }

    fn sift_up<F>(&mut self, mut i: usize, cmp: &F) -> usize where F: Fn(usize, usize) -> Ordering {
        while i > 0 {
            let parent = (i - 1) / 2;
            if cmp(self.heap[i], self.heap[parent]) != Ordering::Less { break; }
            self.swap(i, parent);
            i = parent;
        }
        i
    }

    fn sift_down<F>(&mut self, mut i: usize, cmp: &F) -> usize where F: Fn(usize, usize) -> Ordering {
        loop {
            let l = 2 * i + 1;
            let r = l + 1;
            let mut min = i;

            if l < self.heap.len() && cmp(self.heap[l], self.heap[min]) == Ordering::Less { min = l; }
            if r < self.heap.len() && cmp(self.heap[r], self.heap[min]) == Ordering::Less { min = r; }
            if min == i { break i; }

            self.swap(i, min);
            i = min;
        }
    }

    // Checks the heap property and the position map
    #[allow(dead_code)]
    pub(crate) fn is_consistent<F>(&self, cmp: F) -> bool where F: Fn(usize, usize) -> Ordering {
        let ordered = (1..self.heap.len())
            .all(|i| cmp(self.heap[(i - 1) / 2], self.heap[i]) != Ordering::Greater);
        let indexed = self.heap.iter().enumerate()
            .all(|(i, &item)| self.positions[item] == Some(i));
        let count = self.positions.iter().filter(|p| p.is_some()).count();
        ordered && indexed && count == self.heap.len()
    }
}
