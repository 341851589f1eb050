//! Interactive pieces of the deck screen.
//!
//! [`stack_view::StackView`] owns the live profiles and hands pointer input to the
//! [`card_view::CardView`] it's addressed to. Cards report dismissals back up through their
//! `Action`, the stack drops the profile and rebuilds what is visible.

pub mod card_view;
pub mod stack_view;
