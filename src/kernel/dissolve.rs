//! Planar union of line segments.

use crate::geometry::{LineString, MultiLineString};
use crate::primitives::{Point2, Segment2, SegmentIntersection};
use num_traits::Float;
use std::cmp::Ordering;

/// Dissolves `segments` into a noded, duplicate-free set of line pieces.
///
/// Every segment is split where it crosses or touches another and at the
/// ends of collinear overlaps. Pieces shorter than `eps` are dropped, and
/// pieces whose endpoints match within `eps` (in either direction) are kept
/// once. Each piece is oriented lexicographically and the output is sorted,
/// so the result does not depend on the input order.
///
/// Pieces that share only an endpoint stay separate.
///
/// # Complexity
///
/// O(n²) in the number of segments.
pub fn union_segments<F: Float>(segments: &[Segment2<F>], eps: F) -> MultiLineString<F> {
    let segments: Vec<Segment2<F>> = segments
        .iter()
        .copied()
        .filter(|s| !s.is_degenerate(eps))
        .collect();

    let mut cuts: Vec<Vec<F>> = vec![vec![F::zero(), F::one()]; segments.len()];
    for i in 0..segments.len() {
        for j in (i + 1)..segments.len() {
            let (a, b) = (segments[i], segments[j]);
            if !a.bounds_overlap(b, eps) {
                continue;
            }
            match a.intersect(b, eps) {
                SegmentIntersection::None => {}
                SegmentIntersection::Point { t1, t2, .. } => {
                    cuts[i].push(t1);
                    cuts[j].push(t2);
                }
                SegmentIntersection::Overlap { start, end } => {
                    for p in [start, end] {
                        cuts[i].push(clamp_unit(a.project(p)));
                        cuts[j].push(clamp_unit(b.project(p)));
                    }
                }
            }
        }
    }

    let mut pieces: Vec<Segment2<F>> = Vec::new();
    for (segment, mut ts) in segments.iter().zip(cuts) {
        ts.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        let mut prev = segment.start;
        for t in ts {
            let point = if t >= F::one() {
                segment.end
            } else {
                segment.point_at(t)
            };
            if prev.distance_squared(point) <= eps * eps {
                continue;
            }
            push_unique(&mut pieces, Segment2::new(prev, point).canonical(), eps);
            prev = point;
        }
    }

    pieces.sort_by(|a, b| {
        a.start
            .lexicographic_cmp(&b.start)
            .then_with(|| a.end.lexicographic_cmp(&b.end))
    });
    pieces.into_iter().map(LineString::from).collect()
}

fn push_unique<F: Float>(pieces: &mut Vec<Segment2<F>>, piece: Segment2<F>, eps: F) {
    let eps_sq = eps * eps;
    let close = |p: Point2<F>, q: Point2<F>| p.distance_squared(q) <= eps_sq;
    let duplicate = pieces.iter().any(|kept| {
        (close(kept.start, piece.start) && close(kept.end, piece.end))
            || (close(kept.start, piece.end) && close(kept.end, piece.start))
    });
    if !duplicate {
        pieces.push(piece);
    }
}

#[inline]
fn clamp_unit<F: Float>(t: F) -> F {
    t.max(F::zero()).min(F::one())
}
