use crate::model::layers::PhotoTransform;

/// Scale at which a `w x h` image covers a disk of `radius` (fills its bounding square).
pub fn cover_ratio(w: f64, h: f64, radius: f64) -> f64 {
    if w <= 0.0 || h <= 0.0 {
        return 1.0;
    }
    (2.0 * radius / w).max(2.0 * radius / h)
}

/// Scale at which a `w x h` image fits entirely inside the bounding square of the disk.
pub(crate) fn contain_ratio(w: f64, h: f64, radius: f64) -> f64 {
    if w <= 0.0 || h <= 0.0 {
        return 1.0;
    }
    (2.0 * radius / w).min(2.0 * radius / h)
}

/// Transform that shows the whole photo: user scale `contain / cover`, centered, unrotated.
///
/// The result is 1 for square photos and `min(a, 1/a)` for aspect ratio `a` otherwise. The
/// photo scale floor ([`MIN_PHOTO_SCALE`](crate::model::layers::MIN_PHOTO_SCALE)) still applies,
/// so beyond a 10:1 aspect ratio the long side overflows the disk and is cropped.
pub fn auto_fit(w: f64, h: f64, radius: f64) -> PhotoTransform {
    let mut t = PhotoTransform::default();
    t.set_scale(contain_ratio(w, h, radius) / cover_ratio(w, h, radius));
    t
}

#[cfg(test)]
#[path = "../../tests/unit/analysis/autofit.rs"]
mod tests;
