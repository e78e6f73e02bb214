//! Mission systems. Each system is a set of functions operating on the
//! world; the engine wires them together and owns the call order.

pub mod combat;
pub mod enemy_turn;
pub mod movement;
pub mod snapshot;
