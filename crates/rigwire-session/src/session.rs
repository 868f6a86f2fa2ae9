//! Session -- the abstract operation surface of one connected device.
//!
//! A [`Session`] owns one transport (inside its [`Engine`]), shares one
//! immutable [`CapabilityDescriptor`], and keeps a [`StateCache`] and the
//! [`DetectedHardware`] flags. All of that mutable state sits behind one
//! async mutex, so concurrent callers on the same session are serialized
//! for the whole of an operation: selector resolution, cache lookup,
//! transaction and cache update happen as one step.
//!
//! Every operation validates against the descriptor before anything is
//! written. Gets are served from the cache while fresh; the cache is only
//! ever written after the device confirmed a transaction.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, trace};

use rigwire_core::cache::StateCache;
use rigwire_core::caps::CapabilityDescriptor;
use rigwire_core::command::{Command, Operation};
use rigwire_core::error::{Error, Result};
use rigwire_core::hardware::DetectedHardware;
use rigwire_core::menu::{MenuToken, MenuValue};
use rigwire_core::port::PortConfig;
use rigwire_core::probe::ProbeIo;
use rigwire_core::transport::Transport;
use rigwire_core::types::{
    Channel, Func, Level, Mode, Passband, PowerBand, Quantity, ScanOp, SplitState, Value, Vfo,
    VfoSelector, VfoState,
};

use crate::backend::Backend;
use crate::engine::Engine;

/// Pull one variant out of a decoded [`Value`].
macro_rules! unpack {
    ($value:expr, $variant:ident) => {
        match $value {
            Value::$variant(inner) => Ok(inner),
            other => Err(Error::Garbled(format!(
                concat!("expected ", stringify!($variant), " value, decoded {:?}"),
                other
            ))),
        }
    };
}

/// Where a value lives in the cache.
#[derive(Debug, Clone, Copy)]
enum Slot {
    /// A per-VFO quantity.
    Vfo(Vfo, Quantity),
    /// A session-wide quantity, kept under whichever VFO is selected.
    Selected(Quantity),
}

impl Slot {
    fn key(self, current: Vfo) -> (Vfo, Quantity) {
        match self {
            Slot::Vfo(vfo, quantity) => (vfo, quantity),
            Slot::Selected(quantity) => (current, quantity),
        }
    }
}

struct Inner {
    engine: Engine,
    cache: StateCache,
    /// Selected VFO, once known.
    current: Option<Vfo>,
    detected: DetectedHardware,
}

/// A connected device.
///
/// Built with [`SessionBuilder`](crate::builder::SessionBuilder).
pub struct Session {
    caps: Arc<CapabilityDescriptor>,
    backend: Backend,
    inner: Mutex<Inner>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("model", &self.caps.model_id)
            .field("backend", &self.backend)
            .finish_non_exhaustive()
    }
}

impl Session {
    pub(crate) fn new(
        caps: Arc<CapabilityDescriptor>,
        transport: Box<dyn Transport>,
        config: PortConfig,
        cache_ttl: Duration,
    ) -> Result<Self> {
        let backend = Backend::for_protocol(&caps.protocol)?;
        debug!(model = caps.model_id, ?cache_ttl, "session opened");
        Ok(Session {
            caps,
            backend,
            inner: Mutex::new(Inner {
                engine: Engine::new(transport, config),
                cache: StateCache::new(cache_ttl),
                current: None,
                detected: DetectedHardware::default(),
            }),
        })
    }

    /// The model's descriptor.
    pub fn capabilities(&self) -> &CapabilityDescriptor {
        &self.caps
    }

    /// Close the transport and forget everything learned about the device.
    ///
    /// Detected hardware goes back to unknown, so a later session probes
    /// again.
    pub async fn close(&self) -> Result<()> {
        let mut inner = self.inner.lock().await;
        inner.cache.invalidate_all();
        inner.detected.reset();
        inner.current = None;
        debug!(model = self.caps.model_id, "session closed");
        inner.engine.close().await
    }

    /// Whether the transport is still open.
    pub async fn is_open(&self) -> bool {
        self.inner.lock().await.engine.is_connected()
    }

    // ---------------------------------------------------------------
    // Frequency, mode, passband
    // ---------------------------------------------------------------

    pub async fn get_frequency(&self, sel: impl Into<VfoSelector>) -> Result<u64> {
        let mut inner = self.inner.lock().await;
        let vfo = self.resolve(&mut inner, sel.into()).await?;
        debug!(vfo = %vfo, "reading frequency");
        let value = self
            .fetch(&mut inner, Command::GetFrequency(vfo), Some(Slot::Vfo(vfo, Quantity::Frequency)))
            .await?;
        unpack!(value, Frequency)
    }

    pub async fn set_frequency(&self, sel: impl Into<VfoSelector>, freq_hz: u64) -> Result<()> {
        let mut inner = self.inner.lock().await;
        let vfo = self.resolve(&mut inner, sel.into()).await?;
        debug!(vfo = %vfo, freq_hz, "setting frequency");
        self.apply(
            &mut inner,
            Command::SetFrequency(vfo, freq_hz),
            Some((Slot::Vfo(vfo, Quantity::Frequency), Value::Frequency(freq_hz))),
        )
        .await
    }

    pub async fn get_mode(&self, sel: impl Into<VfoSelector>) -> Result<Mode> {
        let mut inner = self.inner.lock().await;
        let vfo = self.resolve(&mut inner, sel.into()).await?;
        debug!(vfo = %vfo, "reading mode");
        let value = self
            .fetch(&mut inner, Command::GetMode(vfo), Some(Slot::Vfo(vfo, Quantity::Mode)))
            .await?;
        unpack!(value, Mode)
    }

    /// Set the mode. The passband usually follows the mode on the device,
    /// so its cached value is dropped.
    pub async fn set_mode(&self, sel: impl Into<VfoSelector>, mode: Mode) -> Result<()> {
        let mut inner = self.inner.lock().await;
        let vfo = self.resolve(&mut inner, sel.into()).await?;
        debug!(vfo = %vfo, %mode, "setting mode");
        self.apply(
            &mut inner,
            Command::SetMode(vfo, mode),
            Some((Slot::Vfo(vfo, Quantity::Mode), Value::Mode(mode))),
        )
        .await?;
        inner.cache.invalidate(vfo, Quantity::Passband);
        Ok(())
    }

    pub async fn get_passband(&self, sel: impl Into<VfoSelector>) -> Result<Passband> {
        let mut inner = self.inner.lock().await;
        let vfo = self.resolve(&mut inner, sel.into()).await?;
        debug!(vfo = %vfo, "reading passband");
        let value = self
            .fetch(&mut inner, Command::GetPassband(vfo), Some(Slot::Vfo(vfo, Quantity::Passband)))
            .await?;
        unpack!(value, Passband)
    }

    pub async fn set_passband(&self, sel: impl Into<VfoSelector>, passband: Passband) -> Result<()> {
        let mut inner = self.inner.lock().await;
        let vfo = self.resolve(&mut inner, sel.into()).await?;
        debug!(vfo = %vfo, hz = passband.hz(), "setting passband");
        self.apply(
            &mut inner,
            Command::SetPassband(vfo, passband),
            Some((Slot::Vfo(vfo, Quantity::Passband), Value::Passband(passband))),
        )
        .await
    }

    // ---------------------------------------------------------------
    // VFO selection, PTT, split
    // ---------------------------------------------------------------

    /// The selected VFO.
    ///
    /// Read from the device when the model can report it; otherwise the
    /// selection this session last made (initially the model's first VFO).
    pub async fn get_vfo(&self) -> Result<Vfo> {
        let mut inner = self.inner.lock().await;
        debug!("reading selected VFO");
        if self.caps.supports(Operation::GetVfo) {
            self.read_selected(&mut inner).await
        } else {
            self.current(&mut inner).await
        }
    }

    /// Select a VFO. Every cached value is dropped, since frequency and
    /// mode entries are bound to the receive/transmit roles that just
    /// moved.
    pub async fn set_vfo(&self, vfo: Vfo) -> Result<()> {
        let mut inner = self.inner.lock().await;
        debug!(vfo = %vfo, "selecting VFO");
        self.apply(&mut inner, Command::SetVfo(vfo), None).await?;
        inner.cache.invalidate_all();
        inner.current = Some(vfo);
        Ok(())
    }

    pub async fn get_ptt(&self) -> Result<bool> {
        let mut inner = self.inner.lock().await;
        debug!("reading PTT state");
        let value = self.fetch(&mut inner, Command::GetPtt, Some(Slot::Selected(Quantity::Ptt))).await?;
        unpack!(value, Bool)
    }

    pub async fn set_ptt(&self, on: bool) -> Result<()> {
        let mut inner = self.inner.lock().await;
        debug!(on, "setting PTT");
        self.apply(&mut inner, Command::SetPtt(on), Some((Slot::Selected(Quantity::Ptt), Value::Bool(on))))
            .await
    }

    /// Split state. When split is on, the partner of the selected VFO
    /// transmits.
    pub async fn get_split(&self) -> Result<SplitState> {
        let mut inner = self.inner.lock().await;
        debug!("reading split state");
        self.split_state(&mut inner).await
    }

    /// Turn split on or off. Entries for both VFOs of the pair are dropped
    /// because their receive/transmit roles changed. With split off the
    /// selected VFO transmits, whatever `tx_vfo` says.
    pub async fn set_split(&self, split: SplitState) -> Result<()> {
        let mut inner = self.inner.lock().await;
        debug!(enabled = split.enabled, tx = %split.tx_vfo, "setting split");
        self.apply(&mut inner, Command::SetSplit(split), None).await?;
        let current = self.current(&mut inner).await?;
        inner.cache.invalidate_vfo(current);
        if let Some(partner) = current.other() {
            inner.cache.invalidate_vfo(partner);
        }
        inner.cache.invalidate_vfo(split.tx_vfo);
        let split = if split.enabled { split } else { SplitState::off(current) };
        inner.cache.write(current, Quantity::Split, Value::Split(split));
        Ok(())
    }

    /// Frequency of the transmit VFO.
    pub async fn get_split_frequency(&self) -> Result<u64> {
        self.get_frequency(VfoSelector::Tx).await
    }

    /// Tune the transmit VFO.
    pub async fn set_split_frequency(&self, freq_hz: u64) -> Result<()> {
        self.set_frequency(VfoSelector::Tx, freq_hz).await
    }

    /// Mode of the transmit VFO.
    pub async fn get_split_mode(&self) -> Result<Mode> {
        self.get_mode(VfoSelector::Tx).await
    }

    /// Set the mode of the transmit VFO.
    pub async fn set_split_mode(&self, mode: Mode) -> Result<()> {
        self.set_mode(VfoSelector::Tx, mode).await
    }

    // ---------------------------------------------------------------
    // Clarifier
    // ---------------------------------------------------------------

    pub async fn get_rit(&self, sel: impl Into<VfoSelector>) -> Result<i32> {
        let mut inner = self.inner.lock().await;
        let vfo = self.resolve(&mut inner, sel.into()).await?;
        debug!(vfo = %vfo, "reading RIT");
        let value = self.fetch(&mut inner, Command::GetRit(vfo), Some(Slot::Vfo(vfo, Quantity::Rit))).await?;
        unpack!(value, Offset)
    }

    pub async fn set_rit(&self, sel: impl Into<VfoSelector>, offset_hz: i32) -> Result<()> {
        let mut inner = self.inner.lock().await;
        let vfo = self.resolve(&mut inner, sel.into()).await?;
        debug!(vfo = %vfo, offset_hz, "setting RIT");
        self.apply(
            &mut inner,
            Command::SetRit(vfo, offset_hz),
            Some((Slot::Vfo(vfo, Quantity::Rit), Value::Offset(offset_hz))),
        )
        .await
    }

    pub async fn get_xit(&self, sel: impl Into<VfoSelector>) -> Result<i32> {
        let mut inner = self.inner.lock().await;
        let vfo = self.resolve(&mut inner, sel.into()).await?;
        debug!(vfo = %vfo, "reading XIT");
        let value = self.fetch(&mut inner, Command::GetXit(vfo), Some(Slot::Vfo(vfo, Quantity::Xit))).await?;
        unpack!(value, Offset)
    }

    pub async fn set_xit(&self, sel: impl Into<VfoSelector>, offset_hz: i32) -> Result<()> {
        let mut inner = self.inner.lock().await;
        let vfo = self.resolve(&mut inner, sel.into()).await?;
        debug!(vfo = %vfo, offset_hz, "setting XIT");
        self.apply(
            &mut inner,
            Command::SetXit(vfo, offset_hz),
            Some((Slot::Vfo(vfo, Quantity::Xit), Value::Offset(offset_hz))),
        )
        .await
    }

    // ---------------------------------------------------------------
    // Levels and functions
    // ---------------------------------------------------------------

    /// Read a level. Meter readings are never cached.
    pub async fn get_level(&self, level: Level) -> Result<i32> {
        let mut inner = self.inner.lock().await;
        debug!(%level, "reading level");
        let key = (!level.is_read_only()).then_some(Slot::Selected(Quantity::Level(level)));
        let value = self.fetch(&mut inner, Command::GetLevel(level), key).await?;
        unpack!(value, Level)
    }

    /// Write a level. Values outside the descriptor's range are rejected,
    /// never clamped. RF power is checked against the bounds of the
    /// detected power head.
    pub async fn set_level(&self, level: Level, value: i32) -> Result<()> {
        let mut inner = self.inner.lock().await;
        debug!(%level, value, "setting level");
        self.apply(
            &mut inner,
            Command::SetLevel(level, value),
            Some((Slot::Selected(Quantity::Level(level)), Value::Level(value))),
        )
        .await
    }

    pub async fn get_func(&self, func: Func) -> Result<bool> {
        let mut inner = self.inner.lock().await;
        debug!(%func, "reading function");
        let value = self
            .fetch(&mut inner, Command::GetFunc(func), Some(Slot::Selected(Quantity::Func(func))))
            .await?;
        unpack!(value, Bool)
    }

    pub async fn set_func(&self, func: Func, on: bool) -> Result<()> {
        let mut inner = self.inner.lock().await;
        debug!(%func, on, "setting function");
        self.apply(
            &mut inner,
            Command::SetFunc(func, on),
            Some((Slot::Selected(Quantity::Func(func)), Value::Bool(on))),
        )
        .await
    }

    // ---------------------------------------------------------------
    // Memory and scan
    // ---------------------------------------------------------------

    /// The selected memory channel.
    pub async fn get_memory(&self) -> Result<u16> {
        let mut inner = self.inner.lock().await;
        debug!("reading memory channel");
        let value = self.fetch(&mut inner, Command::GetMemory, None).await?;
        unpack!(value, MemoryNumber)
    }

    /// Recall a memory channel onto the selected VFO.
    pub async fn set_memory(&self, number: u16) -> Result<()> {
        let mut inner = self.inner.lock().await;
        debug!(number, "recalling memory channel");
        self.apply(&mut inner, Command::SetMemory(number), None).await?;
        let vfo = self.current(&mut inner).await?;
        inner.cache.invalidate_vfo(vfo);
        Ok(())
    }

    pub async fn read_channel(&self, number: u16) -> Result<Channel> {
        let mut inner = self.inner.lock().await;
        debug!(number, "reading memory channel contents");
        let value = self.fetch(&mut inner, Command::ReadChannel(number), None).await?;
        unpack!(value, Channel)
    }

    pub async fn write_channel(&self, channel: Channel) -> Result<()> {
        let mut inner = self.inner.lock().await;
        debug!(number = channel.number, freq_hz = channel.freq_hz, mode = %channel.mode, "writing memory channel");
        self.apply(&mut inner, Command::WriteChannel(channel), None).await
    }

    /// Start or stop scanning. Scanning retunes the selected VFO, so its
    /// cached entries are dropped.
    pub async fn scan(&self, op: ScanOp) -> Result<()> {
        let mut inner = self.inner.lock().await;
        debug!(?op, "scan");
        self.apply(&mut inner, Command::Scan(op), None).await?;
        let vfo = self.current(&mut inner).await?;
        inner.cache.invalidate_vfo(vfo);
        Ok(())
    }

    // ---------------------------------------------------------------
    // Extended menu
    // ---------------------------------------------------------------

    /// Read an extended menu item.
    ///
    /// Items that need optional hardware fail with [`Error::Unavailable`]
    /// unless detection confirmed it, before anything is sent.
    pub async fn get_menu(&self, token: MenuToken) -> Result<MenuValue> {
        let mut inner = self.inner.lock().await;
        self.read_menu(&mut inner, token).await
    }

    /// Write an extended menu item. The same hardware guardrail as
    /// [`get_menu`](Self::get_menu) applies, and the value is range- and
    /// width-checked against the item before anything is sent.
    pub async fn set_menu(&self, token: MenuToken, value: MenuValue) -> Result<()> {
        let mut inner = self.inner.lock().await;
        self.write_menu(&mut inner, token, value).await
    }

    /// [`get_menu`](Self::get_menu) by symbolic name.
    pub async fn get_menu_by_name(&self, name: &str) -> Result<MenuValue> {
        self.get_menu(self.menu_token(name)?).await
    }

    /// [`set_menu`](Self::set_menu) by symbolic name.
    pub async fn set_menu_by_name(&self, name: &str, value: MenuValue) -> Result<()> {
        self.set_menu(self.menu_token(name)?, value).await
    }

    /// Transmit power ceiling of `band` in watts.
    ///
    /// Read from the menu item of the detected power head: the amplifier
    /// head keeps its own ceilings, which stay unavailable until detection
    /// confirms it.
    pub async fn get_max_power(&self, band: PowerBand) -> Result<i32> {
        let mut inner = self.inner.lock().await;
        let token = self.caps.max_power_token(band, &inner.detected)?;
        debug!(%band, %token, "reading power ceiling");
        match self.read_menu(&mut inner, token).await? {
            MenuValue::Number(watts) => Ok(watts),
            other => Err(Error::Garbled(format!("power ceiling {other:?} is not a number"))),
        }
    }

    /// Set the transmit power ceiling of `band` on the detected power head.
    pub async fn set_max_power(&self, band: PowerBand, watts: i32) -> Result<()> {
        let mut inner = self.inner.lock().await;
        let token = self.caps.max_power_token(band, &inner.detected)?;
        debug!(%band, %token, watts, "setting power ceiling");
        self.write_menu(&mut inner, token, MenuValue::Number(watts)).await
    }

    async fn read_menu(&self, inner: &mut Inner, token: MenuToken) -> Result<MenuValue> {
        self.caps.bind(Operation::GetMenu)?;
        let item = self.caps.menu.check_access(token, &inner.detected)?;
        debug!(%token, name = item.name, "reading menu item");
        let value = self.fetch(inner, Command::GetMenu(token), None).await?;
        item.parse_value(&unpack!(value, Menu)?)
    }

    async fn write_menu(&self, inner: &mut Inner, token: MenuToken, value: MenuValue) -> Result<()> {
        self.caps.bind(Operation::SetMenu)?;
        let item = self.caps.menu.check_access(token, &inner.detected)?;
        let field = item.format_value(&value)?;
        debug!(%token, name = item.name, %value, "setting menu item");
        self.apply(inner, Command::SetMenu(token, field), None).await
    }

    fn menu_token(&self, name: &str) -> Result<MenuToken> {
        self.caps
            .menu
            .token_for(name)
            .ok_or_else(|| Error::Config(format!("{} has no menu item {name:?}", self.caps.name)))
    }

    // ---------------------------------------------------------------
    // Hardware detection and state snapshots
    // ---------------------------------------------------------------

    /// Run the model's detection probe and store the result.
    ///
    /// Models without a probe report `probed` with everything unknown.
    /// The probe may briefly change device settings, so the cache is
    /// dropped afterwards.
    pub async fn detect_hardware(&self) -> Result<DetectedHardware> {
        let mut inner = self.inner.lock().await;
        let detected = match &self.caps.probe {
            Some(probe) => {
                debug!(model = self.caps.model_id, "probing optional hardware");
                let mut link = ProbeLink {
                    backend: &self.backend,
                    engine: &mut inner.engine,
                };
                probe.probe(&mut link).await
            }
            None => DetectedHardware {
                probed: true,
                ..DetectedHardware::default()
            },
        };
        debug!(amplifier = ?detected.amplifier, power = %detected.power, "detection finished");
        inner.detected = detected;
        inner.cache.invalidate_all();
        Ok(detected)
    }

    /// The flags from the last detection run.
    pub async fn detected_hardware(&self) -> DetectedHardware {
        self.inner.lock().await.detected
    }

    /// Everything the cache still holds fresh for one VFO. Nothing is read
    /// from the device beyond what resolving the selector needs.
    pub async fn vfo_state(&self, sel: impl Into<VfoSelector>) -> Result<VfoState> {
        let mut inner = self.inner.lock().await;
        let vfo = self.resolve(&mut inner, sel.into()).await?;
        let current = self.current(&mut inner).await?;
        let fresh = |q: Quantity| match inner.cache.read(vfo, q) {
            (Some(value), true) => Some(value),
            _ => None,
        };
        let split_partner = match inner.cache.read(current, Quantity::Split) {
            (Some(Value::Split(split)), true) if split.enabled && split.tx_vfo != vfo => {
                Some(split.tx_vfo)
            }
            _ => None,
        };
        Ok(VfoState {
            freq_hz: fresh(Quantity::Frequency).and_then(|v| unpack!(v, Frequency).ok()),
            mode: fresh(Quantity::Mode).and_then(|v| unpack!(v, Mode).ok()),
            passband: fresh(Quantity::Passband).and_then(|v| unpack!(v, Passband).ok()),
            split_partner,
            rit_hz: fresh(Quantity::Rit).and_then(|v| unpack!(v, Offset).ok()),
            xit_hz: fresh(Quantity::Xit).and_then(|v| unpack!(v, Offset).ok()),
        })
    }

    // ---------------------------------------------------------------
    // Internals
    // ---------------------------------------------------------------

    /// Validate, serve from cache when fresh, otherwise transact and cache
    /// the decoded value.
    async fn fetch(
        &self,
        inner: &mut Inner,
        cmd: Command,
        slot: Option<Slot>,
    ) -> Result<Value> {
        self.caps.validate_for(&cmd, &inner.detected)?;
        let current = self.current(inner).await?;
        let key = slot.map(|slot| slot.key(current));
        if let Some((vfo, quantity)) = key {
            if let (Some(value), true) = inner.cache.read(vfo, quantity) {
                trace!(vfo = %vfo, ?quantity, "cache hit");
                return Ok(value);
            }
        }
        let value = self
            .backend
            .transact(&mut inner.engine, &cmd, current, &inner.detected)
            .await?;
        if let Some((vfo, quantity)) = key {
            inner.cache.write(vfo, quantity, value.clone());
        }
        Ok(value)
    }

    /// Validate and transact a set; on success record `update`.
    async fn apply(
        &self,
        inner: &mut Inner,
        cmd: Command,
        update: Option<(Slot, Value)>,
    ) -> Result<()> {
        self.caps.validate_for(&cmd, &inner.detected)?;
        let current = self.current(inner).await?;
        self.backend
            .transact(&mut inner.engine, &cmd, current, &inner.detected)
            .await?;
        if let Some((slot, value)) = update {
            let (vfo, quantity) = slot.key(current);
            inner.cache.write(vfo, quantity, value);
        }
        Ok(())
    }

    /// The selected VFO, learning it on first use.
    async fn current(&self, inner: &mut Inner) -> Result<Vfo> {
        if let Some(vfo) = inner.current {
            return Ok(vfo);
        }
        if self.caps.supports(Operation::GetVfo) {
            return self.read_selected(inner).await;
        }
        let vfo = self.first_vfo()?;
        inner.current = Some(vfo);
        Ok(vfo)
    }

    /// Ask the device which VFO is selected.
    async fn read_selected(&self, inner: &mut Inner) -> Result<Vfo> {
        let assumed = match inner.current {
            Some(vfo) => vfo,
            None => self.first_vfo()?,
        };
        let value = self
            .backend
            .transact(&mut inner.engine, &Command::GetVfo, assumed, &inner.detected)
            .await?;
        let vfo = unpack!(value, Vfo)?;
        if inner.current.is_some_and(|known| known != vfo) {
            debug!(vfo = %vfo, "selection changed on the device");
            inner.cache.invalidate_all();
        }
        inner.current = Some(vfo);
        Ok(vfo)
    }

    fn first_vfo(&self) -> Result<Vfo> {
        self.caps
            .vfos
            .first()
            .copied()
            .ok_or_else(|| Error::Config(format!("{} declares no VFOs", self.caps.name)))
    }

    async fn resolve(&self, inner: &mut Inner, sel: VfoSelector) -> Result<Vfo> {
        let vfo = match sel {
            VfoSelector::Vfo(vfo) => vfo,
            VfoSelector::Current => self.current(inner).await?,
            VfoSelector::Other => {
                let current = self.current(inner).await?;
                current
                    .other()
                    .ok_or_else(|| Error::Unavailable(format!("{current} has no partner VFO")))?
            }
            VfoSelector::Tx => {
                let current = self.current(inner).await?;
                if self.caps.supports(Operation::GetSplit) {
                    let split = self.split_state(inner).await?;
                    if split.enabled { split.tx_vfo } else { current }
                } else {
                    current
                }
            }
        };
        trace!(selector = %sel, vfo = %vfo, "resolved VFO");
        Ok(vfo)
    }

    /// Split state, cached under the selected VFO.
    async fn split_state(&self, inner: &mut Inner) -> Result<SplitState> {
        let current = self.current(inner).await?;
        if let (Some(Value::Split(split)), true) = inner.cache.read(current, Quantity::Split) {
            return Ok(split);
        }
        let enabled = unpack!(self.fetch(inner, Command::GetSplit, None).await?, Bool)?;
        let split = match current.other() {
            Some(partner) if enabled => SplitState::on(partner),
            _ => SplitState::off(current),
        };
        inner.cache.write(current, Quantity::Split, Value::Split(split));
        Ok(split)
    }
}

/// Raw transactions for a running probe, through the session's engine.
struct ProbeLink<'a> {
    backend: &'a Backend,
    engine: &'a mut Engine,
}

#[async_trait]
impl ProbeIo for ProbeLink<'_> {
    async fn query(&mut self, request: &[u8]) -> Result<Vec<u8>> {
        self.backend.raw_query(self.engine, request).await
    }

    async fn command(&mut self, request: &[u8]) -> Result<()> {
        self.backend.raw_command(self.engine, request).await
    }

    async fn settle(&mut self, delay: Duration) {
        self.engine.settle(delay).await;
    }
}
