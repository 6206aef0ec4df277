//! # State Module
//!
//! The storefront's state containers.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Can construct individual states in isolation
//! 3. **Clearer Command Signatures**: Commands declare exactly what state they need
//! 4. **Reduced Contention**: Independent states don't block each other
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────────┐  │
//! │  │  CatalogState    │  │   CartState      │  │   SessionState       │  │
//! │  │                  │  │                  │  │                      │  │
//! │  │  products        │  │  Mutex<Cart>     │  │  Mutex<Session>      │  │
//! │  │  categories      │  │                  │  │  • active category   │  │
//! │  │  (read-only      │  │  items + totals  │  │  • search query      │  │
//! │  │   after init)    │  │                  │  │  • detail selection  │  │
//! │  │                  │  │                  │  │  • drawer flag       │  │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────────┘  │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CatalogState: immutable after initialization, no lock needed        │
//! │  • CartState / SessionState: Mutex for exclusive access. Commands are  │
//! │    issued one at a time by the single UI thread; the lock makes the    │
//! │    containers Sync without relying on that.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod session;

pub use cart::{CartResponse, CartState};
pub use catalog::{CatalogDocument, CatalogState, CatalogSupplyError};
pub use session::{Session, SessionState, SessionView};
