//! NIF interface for Elixir
//!
//! Exposes block modulation to the sample-generation pipeline. Modulation
//! type is selected at construction time via atom matching; the per-sample
//! work runs inside one NIF call per block.

use rustler::{Atom, Binary, NifResult, NifStruct, ResourceArc};
use std::sync::Mutex;
use tracing::debug;

use crate::carriers::Oscillator;
use crate::codec::CodecProfile;
use crate::error::{ModulationError, ModulationResult};
use crate::modem::{AnalogKind, AnalogModulator, BinaryKind, BinaryModulator, SymbolExtractor};
use crate::timing::FixedTiming;

rustler::atoms! {
    ok,
    // Analog modulation types
    am,
    fm,
    pm,
    // Binary modulation types
    ask,
    fsk,
    psk,
}

/// Carrier request from Elixir
#[derive(NifStruct, Debug, Clone)]
#[module = "PdspModulation.Types.CarrierParams"]
pub struct CarrierParams {
    /// Carrier amplitude [V]
    pub amplitude: f64,
    /// Carrier frequency [Hz]
    pub frequency: f64,
    /// Modulation parameter, meaning depends on the type
    pub k: f64,
}

fn atom_to_analog(atom: Atom) -> ModulationResult<AnalogKind> {
    if atom == am() {
        Ok(AnalogKind::Am)
    } else if atom == fm() {
        Ok(AnalogKind::Fm)
    } else if atom == pm() {
        Ok(AnalogKind::Pm)
    } else {
        Err(ModulationError::UnsupportedModulation(format!("{:?}", atom)))
    }
}

fn atom_to_binary(atom: Atom) -> ModulationResult<BinaryKind> {
    if atom == ask() {
        Ok(BinaryKind::Ask)
    } else if atom == fsk() {
        Ok(BinaryKind::Fsk)
    } else if atom == psk() {
        Ok(BinaryKind::Psk)
    } else {
        Err(ModulationError::UnsupportedModulation(format!("{:?}", atom)))
    }
}

fn nif_error(e: ModulationError) -> rustler::Error {
    rustler::Error::Term(Box::new(e.to_string()))
}

// ============================================================================
// Resources
// ============================================================================

/// NIF resource wrapper for an analog modulator
pub struct AnalogModulatorResource {
    pub inner: Mutex<AnalogModulator<Oscillator>>,
}

#[rustler::resource_impl]
impl rustler::Resource for AnalogModulatorResource {}

/// Binary modulator together with the extractor feeding it
pub struct BinaryChannel {
    pub modulator: BinaryModulator<Oscillator>,
    pub extractor: SymbolExtractor,
}

/// NIF resource wrapper for a binary modulator
pub struct BinaryModulatorResource {
    pub inner: Mutex<BinaryChannel>,
}

#[rustler::resource_impl]
impl rustler::Resource for BinaryModulatorResource {}

// ============================================================================
// Analog NIFs
// ============================================================================

/// Create an analog modulator
///
/// # Arguments
/// * `modulation` - Atom: :am, :fm, :pm
/// * `params` - `%CarrierParams{}`; out-of-range values saturate
#[rustler::nif]
pub fn analog_new(
    modulation: Atom,
    params: CarrierParams,
) -> NifResult<ResourceArc<AnalogModulatorResource>> {
    let kind = atom_to_analog(modulation).map_err(nif_error)?;
    let codec = CodecProfile::DEFAULT;
    let carrier = Oscillator::new(params.frequency, codec.sample_rate);
    let modulator = AnalogModulator::with_codec(
        codec,
        kind,
        params.amplitude,
        params.frequency,
        params.k,
        carrier,
    );
    debug!(?kind, k = modulator.k(), "analog modulator created");

    Ok(ResourceArc::new(AnalogModulatorResource {
        inner: Mutex::new(modulator),
    }))
}

/// Modulate message samples to channel samples
#[rustler::nif]
pub fn analog_modulate(
    modulator: ResourceArc<AnalogModulatorResource>,
    messages: Vec<f64>,
) -> NifResult<Vec<i16>> {
    let mut state = modulator
        .inner
        .lock()
        .map_err(|_| nif_error(ModulationError::LockPoisoned))?;

    Ok(state.modulate(&messages))
}

/// Rewind the carrier
#[rustler::nif]
pub fn analog_reset(modulator: ResourceArc<AnalogModulatorResource>) -> Atom {
    if let Ok(mut state) = modulator.inner.lock() {
        state.reset();
    }
    ok()
}

// ============================================================================
// Binary NIFs
// ============================================================================

/// Create a binary modulator
///
/// # Arguments
/// * `modulation` - Atom: :ask, :fsk, :psk
/// * `params` - `%CarrierParams{}`; out-of-range values saturate
/// * `symbol_rate` - Baud; one symbol per sample when nil
#[rustler::nif]
pub fn binary_new(
    modulation: Atom,
    params: CarrierParams,
    symbol_rate: Option<u32>,
) -> NifResult<ResourceArc<BinaryModulatorResource>> {
    let kind = atom_to_binary(modulation).map_err(nif_error)?;
    let codec = CodecProfile::DEFAULT;
    let carrier = Oscillator::new(params.frequency, codec.sample_rate);
    let mut modulator = BinaryModulator::with_codec(
        codec,
        kind,
        params.amplitude,
        params.frequency,
        params.k,
        carrier,
    );

    if let Some(rate) = symbol_rate {
        let timing = FixedTiming::new(codec.sample_rate, rate).map_err(nif_error)?;
        modulator.set_timing(&timing);
    }
    debug!(
        ?kind,
        k = modulator.k(),
        samples_per_symbol = modulator.samples_per_symbol(),
        "binary modulator created"
    );

    Ok(ResourceArc::new(BinaryModulatorResource {
        inner: Mutex::new(BinaryChannel {
            modulator,
            extractor: SymbolExtractor::new(),
        }),
    }))
}

/// Key bytes (LSB first) onto the carrier
#[rustler::nif]
pub fn binary_modulate(
    modulator: ResourceArc<BinaryModulatorResource>,
    data: Binary,
) -> NifResult<Vec<i16>> {
    let mut state = modulator
        .inner
        .lock()
        .map_err(|_| nif_error(ModulationError::LockPoisoned))?;

    let channel = &mut *state;
    Ok(channel
        .modulator
        .modulate(data.as_slice(), &mut channel.extractor))
}

/// Rewind carrier, symbol pacing and bit cursor
#[rustler::nif]
pub fn binary_reset(modulator: ResourceArc<BinaryModulatorResource>) -> Atom {
    if let Ok(mut state) = modulator.inner.lock() {
        state.modulator.reset();
        state.extractor.reset();
    }
    ok()
}

// ============================================================================
// Codec
// ============================================================================

/// Codec limits as `{max_amplitude_v, max_frequency_hz, volts_per_lsb}`
#[rustler::nif]
pub fn codec_limits() -> (f64, f64, f64) {
    let codec = CodecProfile::DEFAULT;
    (
        codec.max_carrier_amplitude(),
        codec.max_carrier_frequency(),
        codec.volts_per_lsb,
    )
}
