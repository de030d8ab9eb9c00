//--------------------------------------------------------------------
// vec_utils.rs
//--------------------------------------------------------------------
// Utility functions for vectors
//--------------------------------------------------------------------

use arrayvec::*;
use approx::AbsDiffEq;

pub fn arrayvec_dedup_by<A: Array>(v: &mut ArrayVec<A>, f: impl Fn(&A::Item, &A::Item) -> bool)
    where A::Item: Copy + PartialEq {
    if v.len() < 2 { return; }
    let mut j = 0;
    for i in 0..v.len()-1 {
        if !f(&v[i], &v[i+1]) {
            v[j] = v[i];
            j += 1;
        }
    }
    v[j] = v[v.len()-1];
    v.truncate(j+1);
}

// Removes consecutive values closer than the epsilon
pub fn arrayvec_dedup<A: Array>(v: &mut ArrayVec<A>)
    where A::Item: Copy + PartialEq + AbsDiffEq {
    arrayvec_dedup_by(v, |a, b| a.abs_diff_eq(b, <A::Item as AbsDiffEq>::default_epsilon()));
}
