use crate::RowGeometry;

/// Computes the scroll delta that aligns the first visible row with the viewport edge.
///
/// Let `clipped` be the visible height of the row and `H` its full height. When less than half
/// of the row is still visible (`clipped < H / 2`) the list keeps going forward by `clipped`,
/// pushing the row out and landing on the next boundary. Otherwise it scrolls back by
/// `H - clipped` so the whole row is shown. Exactly half goes back.
///
/// ```
/// use snaplist::{RowGeometry, snap_delta};
///
/// assert_eq!(snap_delta(RowGeometry::new(320, 100, 30)), 30);
/// assert_eq!(snap_delta(RowGeometry::new(320, 100, 70)), -30);
/// assert_eq!(snap_delta(RowGeometry::new(320, 100, 50)), -50);
/// ```
pub fn snap_delta(row: RowGeometry) -> i32 {
    let clipped = i64::from(row.clipped());
    let height = i64::from(row.height);

    // `clipped < height / 2` on reals, without the integer division truncation.
    let delta = if clipped * 2 < height {
        clipped
    } else {
        clipped - height
    };
    delta.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
