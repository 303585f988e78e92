//! Register store trait and in-memory implementation.

use std::fmt;
use std::sync::{PoisonError, RwLock};

use tracing::debug;

use crate::error::{RegisterError, RegisterResult};

/// Register classes served by the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterClass {
    Coil,
    DiscreteInput,
    HoldingRegister,
    InputRegister,
}

impl fmt::Display for RegisterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RegisterClass::Coil => "coil",
            RegisterClass::DiscreteInput => "discrete input",
            RegisterClass::HoldingRegister => "holding register",
            RegisterClass::InputRegister => "input register",
        };
        f.write_str(name)
    }
}

/// Discrete-input data blocks.
///
/// The device exposes two discrete blocks: per-gate command bits
/// (`Status`) and derived flags (`Flags`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiscreteBlock {
    Status,
    Flags,
}

/// Typed access to a register-mapped store.
///
/// Bit registers (coils, discrete inputs) read and write `bool`; word
/// registers (holding, input) read and write `u16`. Every call is
/// individually consistent.
pub trait RegisterBus: Send + Sync {
    fn read_coil(&self, addr: u16) -> RegisterResult<bool>;
    fn write_coil(&self, addr: u16, value: bool) -> RegisterResult<()>;
    fn read_discrete(&self, block: DiscreteBlock, addr: u16) -> RegisterResult<bool>;
    fn write_discrete(&self, block: DiscreteBlock, addr: u16, value: bool) -> RegisterResult<()>;
    fn read_holding(&self, addr: u16) -> RegisterResult<u16>;
    fn write_holding(&self, addr: u16, value: u16) -> RegisterResult<()>;
    fn read_input(&self, addr: u16) -> RegisterResult<u16>;
    fn write_input(&self, addr: u16, value: u16) -> RegisterResult<()>;
}

/// Block sizes for a [`MemoryBus`].
///
/// Both discrete blocks share the `discrete` size, mirroring how the
/// device configuration declares a single `di size`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BusLayout {
    pub coils: usize,
    pub discrete: usize,
    pub holding: usize,
    pub input: usize,
}

impl Default for BusLayout {
    /// Sizes covering the damflow register map (see [`crate::map`]).
    fn default() -> Self {
        Self {
            coils: 8,
            discrete: 8,
            holding: 8,
            input: 8,
        }
    }
}

/// In-memory register store.
///
/// One lock per block: a single access never observes a torn register,
/// and writers to different blocks do not contend.
pub struct MemoryBus {
    coils: RwLock<Vec<bool>>,
    status: RwLock<Vec<bool>>,
    flags: RwLock<Vec<bool>>,
    holding: RwLock<Vec<u16>>,
    input: RwLock<Vec<u16>>,
}

impl MemoryBus {
    /// Create a store with every register zeroed.
    pub fn new(layout: BusLayout) -> Self {
        Self {
            coils: RwLock::new(vec![false; layout.coils]),
            status: RwLock::new(vec![false; layout.discrete]),
            flags: RwLock::new(vec![false; layout.discrete]),
            holding: RwLock::new(vec![0; layout.holding]),
            input: RwLock::new(vec![0; layout.input]),
        }
    }

    fn discrete_block(&self, block: DiscreteBlock) -> &RwLock<Vec<bool>> {
        match block {
            DiscreteBlock::Status => &self.status,
            DiscreteBlock::Flags => &self.flags,
        }
    }
}

impl Default for MemoryBus {
    fn default() -> Self {
        Self::new(BusLayout::default())
    }
}

fn read_slot<T: Copy>(
    lock: &RwLock<Vec<T>>,
    class: RegisterClass,
    addr: u16,
) -> RegisterResult<T> {
    let block = lock.read().unwrap_or_else(PoisonError::into_inner);
    block
        .get(addr as usize)
        .copied()
        .ok_or(RegisterError::OutOfRange {
            class,
            addr,
            len: block.len(),
        })
}

fn write_slot<T: Copy>(
    lock: &RwLock<Vec<T>>,
    class: RegisterClass,
    addr: u16,
    value: T,
) -> RegisterResult<()> {
    let mut block = lock.write().unwrap_or_else(PoisonError::into_inner);
    let len = block.len();
    let slot = block
        .get_mut(addr as usize)
        .ok_or(RegisterError::OutOfRange { class, addr, len })?;
    *slot = value;
    Ok(())
}

impl RegisterBus for MemoryBus {
    fn read_coil(&self, addr: u16) -> RegisterResult<bool> {
        let value = read_slot(&self.coils, RegisterClass::Coil, addr)?;
        debug!(addr, value, "coil read");
        Ok(value)
    }

    fn write_coil(&self, addr: u16, value: bool) -> RegisterResult<()> {
        debug!(addr, value, "coil write");
        write_slot(&self.coils, RegisterClass::Coil, addr, value)
    }

    fn read_discrete(&self, block: DiscreteBlock, addr: u16) -> RegisterResult<bool> {
        let value = read_slot(self.discrete_block(block), RegisterClass::DiscreteInput, addr)?;
        debug!(?block, addr, value, "discrete read");
        Ok(value)
    }

    fn write_discrete(&self, block: DiscreteBlock, addr: u16, value: bool) -> RegisterResult<()> {
        debug!(?block, addr, value, "discrete write");
        write_slot(self.discrete_block(block), RegisterClass::DiscreteInput, addr, value)
    }

    fn read_holding(&self, addr: u16) -> RegisterResult<u16> {
        let value = read_slot(&self.holding, RegisterClass::HoldingRegister, addr)?;
        debug!(addr, value, "holding read");
        Ok(value)
    }

    fn write_holding(&self, addr: u16, value: u16) -> RegisterResult<()> {
        debug!(addr, value, "holding write");
        write_slot(&self.holding, RegisterClass::HoldingRegister, addr, value)
    }

    fn read_input(&self, addr: u16) -> RegisterResult<u16> {
        let value = read_slot(&self.input, RegisterClass::InputRegister, addr)?;
        debug!(addr, value, "input read");
        Ok(value)
    }

    fn write_input(&self, addr: u16, value: u16) -> RegisterResult<()> {
        debug!(addr, value, "input write");
        write_slot(&self.input, RegisterClass::InputRegister, addr, value)
    }
}
