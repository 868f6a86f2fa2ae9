//! FTX-1 head and amplifier detection.
//!
//! The FTX-1 body can be driven by the portable field head (battery or
//! external supply) or by the SPA-1 amplifier head. The power command's
//! reply tells the two heads apart: `PC1nnn` for the field head, `PC2nnn`
//! for the amplifier. On the field head the supply is inferred from
//! whether the radio holds 8 W, which it refuses or clamps on battery
//! (6 W max).
//! The amplifier's own firmware query `VE4` confirms it independently.

use async_trait::async_trait;
use tracing::{debug, warn};

use rigwire_core::error::{Error, Result};
use rigwire_core::hardware::{DetectedHardware, PowerClass, Presence};
use rigwire_core::probe::{HardwareProbe, PerturbRestore, ProbeIo};

const POWER_QUERY: &[u8] = b"PC;";
/// 8 W on the field head: above the battery limit.
const POWER_PERTURB: &[u8] = b"PC1008;";
const PERTURB_WATTS: f32 = 8.0;
const AMPLIFIER_QUERY: &[u8] = b"VE4;";

/// Detection sequence for the FTX-1.
#[derive(Debug, Default, Clone, Copy)]
pub struct Ftx1HeadProbe;

impl Ftx1HeadProbe {
    async fn power_class(&self, io: &mut dyn ProbeIo) -> PowerClass {
        let reply = match io.query(POWER_QUERY).await {
            Ok(reply) => reply,
            Err(e) => {
                debug!(error = %e, "power query failed, head unknown");
                return PowerClass::Unknown;
            }
        };
        match reply.get(2) {
            Some(b'1') => self.field_head_supply(io).await,
            Some(b'2') => PowerClass::Amplified,
            other => {
                warn!(code = ?other.map(|b| *b as char), "unknown head code");
                PowerClass::Unknown
            }
        }
    }

    /// Battery unless the radio reads back the full 8 W.
    async fn field_head_supply(&self, io: &mut dyn ProbeIo) -> PowerClass {
        let step = PerturbRestore::new(POWER_QUERY, POWER_PERTURB);
        let outcome = step.run(io, restore_command, read_watts).await;
        match outcome {
            Ok(outcome) => {
                if !outcome.restored {
                    warn!("field head power may be left at 8 W");
                }
                match outcome.readback {
                    Ok(watts) if watts >= PERTURB_WATTS => {
                        debug!(watts, "field head accepted 8 W, external supply");
                        PowerClass::External
                    }
                    Ok(watts) => {
                        debug!(watts, "field head refused 8 W, battery");
                        PowerClass::Battery
                    }
                    Err(e) => {
                        debug!(error = %e, "power read-back failed, assuming battery");
                        PowerClass::Battery
                    }
                }
            }
            Err(e) => {
                warn!(error = %e, "power probe failed, assuming battery");
                PowerClass::Battery
            }
        }
    }

    async fn amplifier(&self, io: &mut dyn ProbeIo) -> Presence {
        match io.query(AMPLIFIER_QUERY).await {
            Ok(reply) if reply.starts_with(b"VE4") => {
                debug!(firmware = %String::from_utf8_lossy(&reply), "SPA-1 detected");
                Presence::Present
            }
            Ok(_) => Presence::Absent,
            Err(Error::Rejected(_)) => Presence::Absent,
            Err(e) => {
                debug!(error = %e, "amplifier query inconclusive");
                Presence::Unknown
            }
        }
    }
}

/// The original reply, re-sent verbatim, restores the setting.
fn restore_command(reply: &[u8]) -> Option<Vec<u8>> {
    (reply.len() > 3 && reply.starts_with(b"PC") && reply.ends_with(b";")).then(|| reply.to_vec())
}

/// Watts from a `PC<head><power>;` reply.
fn read_watts(reply: &[u8]) -> Result<f32> {
    let text = std::str::from_utf8(reply)
        .map_err(|_| Error::Garbled("power reply is not text".into()))?;
    let value = text
        .get(3..)
        .map(|v| v.trim_end_matches(';'))
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::Garbled(format!("power reply too short: {text:?}")))?;
    value
        .parse::<f32>()
        .map_err(|_| Error::Garbled(format!("unparseable power {value:?}")))
}

#[async_trait]
impl HardwareProbe for Ftx1HeadProbe {
    async fn probe(&self, io: &mut dyn ProbeIo) -> DetectedHardware {
        let power = self.power_class(io).await;
        let amplifier = self.amplifier(io).await;
        if power == PowerClass::Amplified && amplifier != Presence::Present {
            warn!(?amplifier, "power command reports the SPA-1 head but VE4 does not");
        }
        DetectedHardware {
            probed: true,
            amplifier,
            power,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// A scripted FTX-1 power/amplifier responder.
    struct Radio {
        head: u8,
        watts: u32,
        max_watts: u32,
        amplifier: bool,
        fail_restore: bool,
        /// Over-limit sets land on the limit instead of being ignored.
        clamps: bool,
        log: Vec<String>,
    }

    impl Radio {
        fn field(watts: u32, max_watts: u32) -> Self {
            Radio {
                head: b'1',
                watts,
                max_watts,
                amplifier: false,
                fail_restore: false,
                clamps: false,
                log: Vec::new(),
            }
        }
    }

    #[async_trait]
    impl ProbeIo for Radio {
        async fn query(&mut self, request: &[u8]) -> Result<Vec<u8>> {
            self.log.push(String::from_utf8_lossy(request).into_owned());
            match request {
                b"PC;" => Ok(format!("PC{}{:03};", self.head as char, self.watts).into_bytes()),
                b"VE4;" if self.amplifier => Ok(b"VE40123;".to_vec()),
                b"VE4;" => Err(Error::Rejected("?;".into())),
                _ => Err(Error::Rejected("?;".into())),
            }
        }

        async fn command(&mut self, request: &[u8]) -> Result<()> {
            let text = String::from_utf8_lossy(request).into_owned();
            self.log.push(text.clone());
            let watts: u32 = text[3..text.len() - 1].parse().map_err(|_| Error::Rejected(text.clone()))?;
            if self.fail_restore && watts != 8 {
                return Err(Error::Timeout);
            }
            if watts > self.max_watts {
                // Battery: silently holds the previous value, or clamps.
                if self.clamps {
                    self.watts = self.max_watts;
                }
                return Ok(());
            }
            self.watts = watts;
            Ok(())
        }

        async fn settle(&mut self, _delay: Duration) {}
    }

    #[tokio::test]
    async fn field_head_on_external_supply() {
        let mut radio = Radio::field(5, 10);
        let hw = Ftx1HeadProbe.probe(&mut radio).await;
        assert!(hw.probed);
        assert_eq!(hw.power, PowerClass::External);
        assert_eq!(hw.amplifier, Presence::Absent);
        assert_eq!(radio.watts, 5, "original power restored");
        assert_eq!(radio.log, vec!["PC;", "PC;", "PC1008;", "PC;", "PC1005;", "VE4;"]);
    }

    #[tokio::test]
    async fn field_head_on_battery() {
        let mut radio = Radio::field(5, 6);
        let hw = Ftx1HeadProbe.probe(&mut radio).await;
        assert_eq!(hw.power, PowerClass::Battery);
        assert_eq!(radio.watts, 5);
    }

    #[tokio::test]
    async fn clamped_readback_below_perturbation_is_battery() {
        let mut radio = Radio {
            clamps: true,
            ..Radio::field(5, 7)
        };
        let hw = Ftx1HeadProbe.probe(&mut radio).await;
        assert_eq!(hw.power, PowerClass::Battery);
        assert_eq!(radio.watts, 5, "original power restored");
    }

    #[tokio::test]
    async fn amplifier_head() {
        let mut radio = Radio {
            head: b'2',
            amplifier: true,
            ..Radio::field(50, 100)
        };
        let hw = Ftx1HeadProbe.probe(&mut radio).await;
        assert_eq!(hw.power, PowerClass::Amplified);
        assert_eq!(hw.amplifier, Presence::Present);
        assert_eq!(radio.log, vec!["PC;", "VE4;"], "amplifier head is never perturbed");
    }

    #[tokio::test]
    async fn failed_restore_is_retried_and_reported_not_returned() {
        let mut radio = Radio {
            fail_restore: true,
            ..Radio::field(5, 10)
        };
        let hw = Ftx1HeadProbe.probe(&mut radio).await;
        assert_eq!(hw.power, PowerClass::External);
        let restores = radio.log.iter().filter(|r| *r == "PC1005;").count();
        assert_eq!(restores, 2);
    }

    #[test]
    fn watts_parsing() {
        assert_eq!(read_watts(b"PC1008;").unwrap(), 8.0);
        assert_eq!(read_watts(b"PC10.5;").unwrap(), 0.5);
        assert!(matches!(read_watts(b"PC;"), Err(Error::Garbled(_))));
        assert!(matches!(read_watts(b"PC1abc;"), Err(Error::Garbled(_))));
    }

    #[test]
    fn restore_is_original_reply() {
        assert_eq!(restore_command(b"PC1005;").unwrap(), b"PC1005;");
        assert!(restore_command(b"?;").is_none());
    }
}
