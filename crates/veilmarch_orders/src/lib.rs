//! Typed order data model for Veilmarch.
//!
//! Orders are what the order interpreter produces: validated, typed command
//! values attached to a unit's command slots, ready for the turn-resolution
//! engine to execute. This crate defines only the data; parsing lives in
//! `veilmarch_parser` and the slots themselves on `veilmarch_world::Unit`.
//!
//! # Modules
//!
//! - [`order`] - The order variants and their payloads
//! - [`refs`] - Target-unit references and item/class selectors
//! - [`vocab`] - Small closed vocabularies (directions, attitudes, modes)
//! - [`turn`] - Deferred turn-block batches

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod order;
pub mod refs;
pub mod turn;
pub mod vocab;

pub use order::{
    BuildOrder, BuildTask, CastArgs, CastOrder, EnterAction, ExchangeOrder, FindTarget, GiveOrder,
    GivePayload, JoinOrder, MonthOrder, MoveOrder, ProduceOrder, SailOrder, ShowRequest,
    StealthOrder, StudyOrder, TeachOrder, TradeAmount, TradeOrder, TransferKind, TransportOrder,
    WithdrawOrder,
};
pub use refs::{ItemSpec, UnitRef};
pub use turn::TurnBlock;
pub use vocab::{
    Attitude, ConsumeMode, Direction, ItemClass, MoveStep, RevealMode, SpoilsFilter, TaxMode,
    TemplateFormat,
};
