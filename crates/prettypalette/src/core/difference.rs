use crate::Float;

/// Compute Delta-E 1976 for CIELAB, i.e., the Euclidian distance.
#[allow(non_snake_case)]
pub(crate) fn delta_e_cie76(coordinates1: &[Float; 3], coordinates2: &[Float; 3]) -> Float {
    let [L1, a1, b1] = coordinates1;
    let [L2, a2, b2] = coordinates2;

    let ΔL = L1 - L2;
    let Δa = a1 - a2;
    let Δb = b1 - b2;

    ΔL.mul_add(ΔL, Δa.mul_add(Δa, Δb * Δb)).sqrt()
}

/// Find the pair of points closest to each other.
///
/// This function compares every point with every later point, computing the
/// distance metric with the given function, and returns the indices of the
/// closest pair together with their distance, or `None` if there are fewer than
/// two points. The scan is row-major and only a strictly smaller distance
/// replaces the current minimum, so that ties resolve to the first pair found.
pub(crate) fn find_closest_pair<P, F>(
    points: &[P],
    mut compute_distance: F,
) -> Option<(usize, usize, Float)>
where
    F: FnMut(&P, &P) -> Float,
{
    let mut min_distance = Float::INFINITY;
    let mut min_pair = None;

    for (index1, point1) in points.iter().enumerate() {
        for (offset, point2) in points[index1 + 1..].iter().enumerate() {
            let distance = compute_distance(point1, point2);
            if distance < min_distance || min_pair.is_none() {
                min_distance = distance;
                min_pair = Some((index1, index1 + 1 + offset));
            }
        }
    }

    min_pair.map(|(index1, index2)| (index1, index2, min_distance))
}

#[cfg(test)]
mod test {
    use super::{delta_e_cie76, find_closest_pair};
    use crate::Float;

    #[test]
    fn test_delta_e() {
        assert_eq!(delta_e_cie76(&[50.0, 0.0, 0.0], &[50.0, 0.0, 0.0]), 0.0);
        assert_eq!(delta_e_cie76(&[50.0, 3.0, 0.0], &[50.0, 0.0, 4.0]), 5.0);
        assert_eq!(
            delta_e_cie76(&[10.0, 20.0, 30.0], &[40.0, 60.0, 30.0]),
            delta_e_cie76(&[40.0, 60.0, 30.0], &[10.0, 20.0, 30.0])
        );
    }

    #[test]
    fn test_closest_pair() {
        let points: [[Float; 3]; 4] = [
            [0.0, 0.0, 0.0],
            [50.0, 0.0, 0.0],
            [100.0, 0.0, 0.0],
            [52.0, 0.0, 0.0],
        ];
        assert_eq!(
            find_closest_pair(&points, delta_e_cie76),
            Some((1, 3, 2.0))
        );

        assert_eq!(find_closest_pair(&points[..1], delta_e_cie76), None);
        let none: [[Float; 3]; 0] = [];
        assert_eq!(find_closest_pair(&none, delta_e_cie76), None);
    }

    #[test]
    fn test_ties_resolve_to_first_pair() {
        let points: [[Float; 3]; 4] = [
            [0.0, 0.0, 0.0],
            [10.0, 0.0, 0.0],
            [20.0, 0.0, 0.0],
            [30.0, 0.0, 0.0],
        ];
        assert_eq!(
            find_closest_pair(&points, delta_e_cie76),
            Some((0, 1, 10.0))
        );

        let same: [[Float; 3]; 3] = [[5.0, 5.0, 5.0]; 3];
        assert_eq!(find_closest_pair(&same, delta_e_cie76), Some((0, 1, 0.0)));
    }
}
