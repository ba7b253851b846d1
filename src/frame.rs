//! Fixed-size on/off frames for a panel of `N` lights.
//!
//! [`BitCanvas`] holds text bits in logical order (column after column, top to
//! bottom). [`LightFrame`] holds the same bits in the order the lights are wired.

use core::ops::{Deref, DerefMut};

/// Logical on/off bits, one per light, before serpentine reordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitCanvas<const N: usize>(pub [bool; N]);

/// On/off state of every light, in physical wiring order.
///
/// Index 0 is the first light on the data line. Hand this (and its length `N`)
/// to whatever drives the LED strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LightFrame<const N: usize>(pub [bool; N]);

macro_rules! bit_frame_impls {
    ($frame:ident) => {
        impl<const N: usize> $frame<N> {
            /// Number of lights in this frame.
            pub const LEN: usize = N;

            /// Create a frame with every light off.
            #[must_use]
            pub const fn new() -> Self {
                Self([false; N])
            }

            /// Number of lights that are on.
            #[must_use]
            pub fn lit_count(&self) -> usize {
                self.0.iter().filter(|&&bit| bit).count()
            }

            /// The frame as `0`/`1` values.
            #[must_use]
            pub fn to_bits(&self) -> [u8; N] {
                self.0.map(u8::from)
            }
        }

        impl<const N: usize> Deref for $frame<N> {
            type Target = [bool; N];

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl<const N: usize> DerefMut for $frame<N> {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }

        impl<const N: usize> From<[bool; N]> for $frame<N> {
            fn from(array: [bool; N]) -> Self {
                Self(array)
            }
        }

        impl<const N: usize> From<$frame<N>> for [bool; N] {
            fn from(frame: $frame<N>) -> Self {
                frame.0
            }
        }

        impl<const N: usize> Default for $frame<N> {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

bit_frame_impls!(BitCanvas);
bit_frame_impls!(LightFrame);

#[cfg(test)]
mod tests {
    use super::{BitCanvas, LightFrame};

    #[test]
    fn new_frame_is_dark() {
        let frame = LightFrame::<6>::new();
        assert_eq!(frame.lit_count(), 0);
        assert_eq!(frame.to_bits(), [0; 6]);
        assert_eq!(frame, LightFrame::default());
    }

    #[test]
    fn to_bits_matches_lights() {
        let mut canvas = BitCanvas::from([false, true, true, false]);
        canvas[3] = true;
        assert_eq!(canvas.to_bits(), [0, 1, 1, 1]);
        assert_eq!(canvas.lit_count(), 3);
        assert_eq!(<[bool; 4]>::from(canvas), [false, true, true, true]);
    }
}
