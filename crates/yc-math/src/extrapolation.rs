//! The extrapolation switch shared by interpolations and term structures.

/// An object that can be asked to answer outside its natural domain.
///
/// The flag is the object-wide default; individual queries may still
/// request extrapolation explicitly.
pub trait Extrapolator {
    /// Return `true` if extrapolation is enabled.
    fn allows_extrapolation(&self) -> bool;

    /// Set the extrapolation flag.
    fn set_extrapolation(&mut self, allow: bool);

    /// Enable extrapolation.
    fn enable_extrapolation(&mut self) {
        self.set_extrapolation(true);
    }

    /// Disable extrapolation.
    fn disable_extrapolation(&mut self) {
        self.set_extrapolation(false);
    }
}
