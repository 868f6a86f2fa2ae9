//! Abstract operations and commands.
//!
//! A [`Command`] is one abstract request with its arguments, already
//! resolved to a concrete [`Vfo`] where one applies. Every command maps to
//! exactly one [`Operation`], which is what capability descriptors gate.

use std::fmt;

use crate::menu::MenuToken;
use crate::types::{Channel, Func, Level, Mode, Passband, ScanOp, SplitState, Vfo};

/// An abstract operation a device model may or may not support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Operation {
    GetFrequency,
    SetFrequency,
    GetMode,
    SetMode,
    GetPassband,
    SetPassband,
    GetVfo,
    SetVfo,
    GetPtt,
    SetPtt,
    GetSplit,
    SetSplit,
    GetRit,
    SetRit,
    GetXit,
    SetXit,
    GetLevel,
    SetLevel,
    GetFunc,
    SetFunc,
    GetMemory,
    SetMemory,
    ReadChannel,
    WriteChannel,
    Scan,
    GetMenu,
    SetMenu,
}

impl Operation {
    /// Every operation, in declaration order.
    pub const ALL: [Operation; 27] = [
        Operation::GetFrequency,
        Operation::SetFrequency,
        Operation::GetMode,
        Operation::SetMode,
        Operation::GetPassband,
        Operation::SetPassband,
        Operation::GetVfo,
        Operation::SetVfo,
        Operation::GetPtt,
        Operation::SetPtt,
        Operation::GetSplit,
        Operation::SetSplit,
        Operation::GetRit,
        Operation::SetRit,
        Operation::GetXit,
        Operation::SetXit,
        Operation::GetLevel,
        Operation::SetLevel,
        Operation::GetFunc,
        Operation::SetFunc,
        Operation::GetMemory,
        Operation::SetMemory,
        Operation::ReadChannel,
        Operation::WriteChannel,
        Operation::Scan,
        Operation::GetMenu,
        Operation::SetMenu,
    ];

    fn bit(self) -> u32 {
        1 << (self as u8)
    }

    /// Whether this operation changes device state.
    pub fn is_set(&self) -> bool {
        matches!(
            self,
            Operation::SetFrequency
                | Operation::SetMode
                | Operation::SetPassband
                | Operation::SetVfo
                | Operation::SetPtt
                | Operation::SetSplit
                | Operation::SetRit
                | Operation::SetXit
                | Operation::SetLevel
                | Operation::SetFunc
                | Operation::SetMemory
                | Operation::WriteChannel
                | Operation::Scan
                | Operation::SetMenu
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Bitmap of supported operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OperationSet(u32);

impl OperationSet {
    /// No operations.
    pub const fn empty() -> Self {
        OperationSet(0)
    }

    /// Every operation.
    pub fn all() -> Self {
        Operation::ALL.into_iter().collect()
    }

    /// Add an operation.
    pub fn with(mut self, op: Operation) -> Self {
        self.0 |= op.bit();
        self
    }

    /// Remove an operation.
    pub fn without(mut self, op: Operation) -> Self {
        self.0 &= !op.bit();
        self
    }

    /// Whether `op` is in the set.
    pub fn contains(&self, op: Operation) -> bool {
        self.0 & op.bit() != 0
    }

    /// Iterate over the operations in the set.
    pub fn iter(&self) -> impl Iterator<Item = Operation> + '_ {
        Operation::ALL.into_iter().filter(|op| self.contains(*op))
    }
}

impl FromIterator<Operation> for OperationSet {
    fn from_iter<I: IntoIterator<Item = Operation>>(iter: I) -> Self {
        iter.into_iter()
            .fold(OperationSet::empty(), |set, op| set.with(op))
    }
}

/// One abstract request with resolved arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    GetFrequency(Vfo),
    SetFrequency(Vfo, u64),
    GetMode(Vfo),
    SetMode(Vfo, Mode),
    GetPassband(Vfo),
    SetPassband(Vfo, Passband),
    GetVfo,
    SetVfo(Vfo),
    GetPtt,
    SetPtt(bool),
    GetSplit,
    SetSplit(SplitState),
    GetRit(Vfo),
    SetRit(Vfo, i32),
    GetXit(Vfo),
    SetXit(Vfo, i32),
    GetLevel(Level),
    SetLevel(Level, i32),
    GetFunc(Func),
    SetFunc(Func, bool),
    GetMemory,
    SetMemory(u16),
    ReadChannel(u16),
    WriteChannel(Channel),
    Scan(ScanOp),
    /// Read an extended menu item.
    GetMenu(MenuToken),
    /// Write an extended menu item; the value is already formatted to the
    /// item's wire width.
    SetMenu(MenuToken, String),
}

impl Command {
    /// The operation this command exercises.
    pub fn operation(&self) -> Operation {
        match self {
            Command::GetFrequency(_) => Operation::GetFrequency,
            Command::SetFrequency(..) => Operation::SetFrequency,
            Command::GetMode(_) => Operation::GetMode,
            Command::SetMode(..) => Operation::SetMode,
            Command::GetPassband(_) => Operation::GetPassband,
            Command::SetPassband(..) => Operation::SetPassband,
            Command::GetVfo => Operation::GetVfo,
            Command::SetVfo(_) => Operation::SetVfo,
            Command::GetPtt => Operation::GetPtt,
            Command::SetPtt(_) => Operation::SetPtt,
            Command::GetSplit => Operation::GetSplit,
            Command::SetSplit(_) => Operation::SetSplit,
            Command::GetRit(_) => Operation::GetRit,
            Command::SetRit(..) => Operation::SetRit,
            Command::GetXit(_) => Operation::GetXit,
            Command::SetXit(..) => Operation::SetXit,
            Command::GetLevel(_) => Operation::GetLevel,
            Command::SetLevel(..) => Operation::SetLevel,
            Command::GetFunc(_) => Operation::GetFunc,
            Command::SetFunc(..) => Operation::SetFunc,
            Command::GetMemory => Operation::GetMemory,
            Command::SetMemory(_) => Operation::SetMemory,
            Command::ReadChannel(_) => Operation::ReadChannel,
            Command::WriteChannel(_) => Operation::WriteChannel,
            Command::Scan(_) => Operation::Scan,
            Command::GetMenu(_) => Operation::GetMenu,
            Command::SetMenu(..) => Operation::SetMenu,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_set_membership() {
        let set = OperationSet::empty()
            .with(Operation::GetFrequency)
            .with(Operation::SetFrequency);
        assert!(set.contains(Operation::GetFrequency));
        assert!(set.contains(Operation::SetFrequency));
        assert!(!set.contains(Operation::GetMode));
        let set = set.without(Operation::SetFrequency);
        assert!(!set.contains(Operation::SetFrequency));
    }

    #[test]
    fn operation_set_all_covers_every_operation() {
        let all = OperationSet::all();
        for op in Operation::ALL {
            assert!(all.contains(op), "{op} missing");
        }
        assert_eq!(all.iter().count(), Operation::ALL.len());
    }

    #[test]
    fn operation_set_from_iter() {
        let set: OperationSet = [Operation::Scan, Operation::GetMenu].into_iter().collect();
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![Operation::Scan, Operation::GetMenu]
        );
    }

    #[test]
    fn command_maps_to_operation() {
        assert_eq!(
            Command::SetFrequency(Vfo::A, 14_074_000).operation(),
            Operation::SetFrequency
        );
        assert_eq!(Command::GetPtt.operation(), Operation::GetPtt);
        assert_eq!(
            Command::SetMenu(MenuToken::new(1, 1, 1), "005".into()).operation(),
            Operation::SetMenu
        );
    }

    #[test]
    fn set_classification() {
        assert!(Operation::SetFrequency.is_set());
        assert!(Operation::Scan.is_set());
        assert!(!Operation::GetFrequency.is_set());
        assert!(!Operation::ReadChannel.is_set());
    }
}
