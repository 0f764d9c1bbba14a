//! # Steque
//!
//! A stack-ended queue: a container that works like a stack on one end and also
//! accepts queue-style inserts on the other end.
//!
//! ## Key Features
//!
//! * **Stack end:** `push` inserts at the back and `pop` removes from the back.
//! * **Queue end:** `enqueue` inserts at the front. Nothing is ever removed from the front.
//! * **Ring buffer:** Both ends are O(1) amortized on a single circular buffer.
//!   Capacity doubles when full and halves at 1/4 occupancy, never dropping below the
//!   configured minimum (10 by default).
//! * **Explicit errors:** Underflow, absent inserts and iterator removal are reported as
//!   [`StequeError`] values; a failed call never changes the steque.
//!
//! ## Iteration order
//!
//! [`Steque::iter`] walks from the back to the front, so the most recently pushed
//! element comes first. Use `.rev()` for front-to-back order.
//!
//! ## Examples
//!
//! ```rust
//! use steque::{Steque, StequeError};
//!
//! let mut s = Steque::new();
//! s.push('a');
//! s.push('b');
//! s.enqueue('z');
//!
//! assert_eq!(s.iter().collect::<String>(), "baz");
//! assert_eq!(s.iter().rev().collect::<String>(), "zab");
//!
//! assert_eq!(s.pop(), Ok('b'));
//! assert_eq!(s.pop(), Ok('a'));
//! assert_eq!(s.pop(), Ok('z'));
//! assert_eq!(s.pop(), Err(StequeError::EmptyContainer));
//! ```
//!
//! Values that may be absent go through the checked entry points:
//!
//! ```rust
//! use steque::{Steque, StequeError};
//!
//! let mut s: Steque<u32> = Steque::new();
//! assert_eq!(s.try_push(None), Err(StequeError::InvalidArgument));
//! assert_eq!(s.try_enqueue(Some(1)), Ok(()));
//! assert_eq!(s.len(), 1);
//! ```
//!
//! ## Threading
//!
//! `Steque<T>` is `Send`/`Sync` whenever `T` is, but it has no internal locking.
//! Wrap it in a `Mutex` to share it between threads.

// --- Module Declarations ---

pub mod error;
pub mod iter;
mod ring;
pub mod steque;

// --- Re-exports ---

pub use error::{Result, StequeError};
pub use iter::{IntoIter, Iter};
pub use steque::Steque;
