//--------------------------------------------------------------------
// visvalingam.rs
//--------------------------------------------------------------------
// Computes, for each point of a polyline, the effective area it had
// when it was removed by the Visvalingam-Whyatt algorithm, and
// filters the polyline by an area threshold
//--------------------------------------------------------------------

use std::cmp::Ordering;

use crate::ordered_float::OrderedFloat;
use crate::geometry::*;
use crate::indexed_heap::IndexedHeap;
use crate::error::*;
use super::MIN_REDUCED_POINTS;

// The triangle formed by a vertex and its current neighbors
#[derive(Copy, Clone, Debug)]
struct VertexRecord {
    prev: usize,
    next: usize,
    area: OrderedFloat<Coord>,
    removed: bool
}

// Areas below the threshold are flattened, so exactly collinear and
// duplicated points always go first
fn effective_area(points: &[Vec2], vertex: usize, rec: &VertexRecord) -> OrderedFloat<Coord> {
    let area = triangle_area(points[rec.prev], points[vertex], points[rec.next]);
    OrderedFloat(if area > NEARLY_ZERO_AREA { area } else { 0.0 })
}

fn by_area(records: &[VertexRecord]) -> impl Fn(usize, usize) -> Ordering + '_ {
    move |a, b| records[a].area.cmp(&records[b].area).then(a.cmp(&b))
}

pub struct SignificanceTable {
    points: Polyline,
    significance: Vec<Coord>,
    removal_order: Vec<usize>
}

impl SignificanceTable {
    pub fn new(points: &[Vec2]) -> StrokeResult<SignificanceTable> {
        require_points(points.len(), 2)?;

        let n = points.len();
        let mut records: Vec<_> = (0..n).map(|i| VertexRecord {
            prev: i.saturating_sub(1),
            next: (i + 1).min(n - 1),
            area: OrderedFloat(0.0),
            removed: false
        }).collect();

        // The endpoints are never removed
        let mut significance = vec![0.0; n];
        significance[0] = CoordM::INFINITY;
        significance[n - 1] = CoordM::INFINITY;

        let mut heap = IndexedHeap::new(n);
        for i in 1..n-1 {
            records[i].area = effective_area(points, i, &records[i]);
            heap.insert(i, by_area(&records));
        }

        let mut removal_order = Vec::with_capacity(heap.len());
        let mut floor = CoordM::MIN;
        while let Some(cur) = heap.pop_min(by_area(&records)) {
            let rec = records[cur];
            assert!(!rec.removed && rec.prev < cur && cur < rec.next,
                "vertex {} was queued in an inconsistent state: {:?}", cur, rec);

            // A point can't be worth less than the ones removed before it
            floor = floor.max(rec.area.into_inner());
            significance[cur] = floor;
            removal_order.push(cur);
            log::trace!("removing vertex {} (area {}, significance {})", cur, rec.area.into_inner(), floor);

            // Unlink the vertex and update its neighbors
            records[cur].removed = true;
            records[rec.prev].next = rec.next;
            records[rec.next].prev = rec.prev;

            for &nb in [rec.prev, rec.next].iter() {
                if heap.contains(nb) {
                    records[nb].area = effective_area(points, nb, &records[nb]);
                    heap.reheapify(nb, by_area(&records));
                }
            }
        }

        log::debug!("computed significance of {} points", n);
        Ok(SignificanceTable { points: points.to_vec(), significance, removal_order })
    }

    pub fn significance(&self) -> &[Coord] { &self.significance }

    // The interior indices in the order the algorithm removed them
    pub fn removal_order(&self) -> &[usize] { &self.removal_order }

    pub fn contains_vertex(&self, i: usize, threshold: Coord) -> bool {
        self.significance[i] > threshold
    }

    // The indices that survive the threshold, or nothing if fewer than
    // four would survive
    pub fn reduce_indices(&self, threshold: Coord) -> Vec<usize> {
        let indices: Vec<_> = (0..self.points.len())
            .filter(|&i| self.contains_vertex(i, threshold))
            .collect();

        if indices.len() < MIN_REDUCED_POINTS {
            log::debug!("area reduction at {} left {} points, discarding", threshold, indices.len());
            Vec::new()
        } else { indices }
    }

    pub fn reduce(&self, threshold: Coord) -> Polyline {
        self.reduce_indices(threshold).into_iter().map(|i| self.points[i]).collect()
    }
}

pub fn visvalingam_simplify(points: &[Vec2], threshold: Coord) -> StrokeResult<Polyline> {
    Ok(SignificanceTable::new(points)?.reduce(threshold))
}
