//! Physical memory tests.
