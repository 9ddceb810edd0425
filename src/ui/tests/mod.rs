//! UI module tests
//!
//! Only the display-independent parts of the UI are tested here.
