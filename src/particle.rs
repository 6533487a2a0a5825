//! In-memory particle record: type, kinematics, and extensible property bags.
//!
//! Well-known per-format metadata (EGS LATCH, PENELOPE ILB, EGS last-interaction
//! coordinates, ...) is modeled as closed enums rather than string keys, each
//! backed by a small index map over a parallel vector. Anything a codec wants to
//! carry that isn't one of those falls into the `Custom` arm, which is backed by
//! its own push-only vector per property kind.

use crate::pdg::ParticleType;

/// Integer-valued property keys recognized across codecs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntPropertyType {
    /// Original histories folded onto this particle since the prior one, inclusive.
    IncrementalHistoryNumber,
    /// EGS 32-bit packed LATCH field.
    EgsLatch,
    /// PENELOPE ILB(1): generation/primary-secondary marker.
    PenelopeIlb1,
    /// PENELOPE ILB(2).
    PenelopeIlb2,
    /// PENELOPE ILB(3).
    PenelopeIlb3,
    /// PENELOPE ILB(4).
    PenelopeIlb4,
    /// PENELOPE ILB(5).
    PenelopeIlb5,
    /// Sink for anonymous custom int values (see [`Particle::push_custom_int`]).
    Custom,
}

/// Float-valued property keys recognized across codecs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatPropertyType {
    /// Last-interaction X coordinate (EGS MODE2 has no counterpart; reserved
    /// for codecs that track it).
    XLast,
    /// Last-interaction Y coordinate.
    YLast,
    /// Last-interaction Z coordinate (EGS MODE2's trailing ZLAST field).
    ZLast,
    /// Sink for anonymous custom float values (see [`Particle::push_custom_float`]).
    Custom,
}

/// Bool-valued property keys recognized across codecs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoolPropertyType {
    /// Whether this particle crossed the scoring surface more than once.
    IsMultipleCrosser,
    /// Whether this particle is a secondary (vs. a primary) per PENELOPE ILB(1)
    /// or EGS LATCH bits 24-28.
    IsSecondaryParticle,
    /// Sink for anonymous custom bool values (see [`Particle::push_custom_bool`]).
    Custom,
}

/// A small map from a fixed-variant key to a slot in a parallel value vector,
/// plus an overflow sink for `Custom` entries that carry no typed slot.
#[derive(Debug, Clone, Default)]
struct PropertyBag<K, V> {
    keys: Vec<K>,
    values: Vec<V>,
    custom: Vec<V>,
}

impl<K: Copy + Eq, V: Copy> PropertyBag<K, V> {
    fn index_of(&self, key: K) -> Option<usize> {
        self.keys.iter().position(|&k| k == key)
    }

    fn has(&self, key: K) -> bool {
        self.index_of(key).is_some()
    }

    fn get(&self, key: K) -> Option<V> {
        self.index_of(key).map(|i| self.values[i])
    }

    fn set(&mut self, key: K, value: V) {
        match self.index_of(key) {
            Some(i) => self.values[i] = value,
            None => {
                self.keys.push(key);
                self.values.push(value);
            }
        }
    }

    fn push_custom(&mut self, value: V) {
        self.custom.push(value);
    }

    fn len(&self) -> usize {
        self.values.len()
    }
}

/// Declares, per spatial/direction/weight axis, whether that axis holds a single
/// constant value across an entire file, enabling a codec to elide the column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedValues {
    /// Whether X is constant across the file.
    pub x_is_constant: bool,
    /// Whether Y is constant across the file.
    pub y_is_constant: bool,
    /// Whether Z is constant across the file.
    pub z_is_constant: bool,
    /// Whether the X direction cosine is constant across the file.
    pub px_is_constant: bool,
    /// Whether the Y direction cosine is constant across the file.
    pub py_is_constant: bool,
    /// Whether the Z direction cosine is constant across the file.
    pub pz_is_constant: bool,
    /// Whether the statistical weight is constant across the file.
    pub weight_is_constant: bool,
    /// The constant X value, when `x_is_constant`.
    pub constant_x: f32,
    /// The constant Y value, when `y_is_constant`.
    pub constant_y: f32,
    /// The constant Z value, when `z_is_constant`.
    pub constant_z: f32,
    /// The constant X direction cosine, when `px_is_constant`.
    pub constant_px: f32,
    /// The constant Y direction cosine, when `py_is_constant`.
    pub constant_py: f32,
    /// The constant Z direction cosine, when `pz_is_constant`.
    pub constant_pz: f32,
    /// The constant weight, when `weight_is_constant`.
    pub constant_weight: f32,
}

impl Default for FixedValues {
    fn default() -> Self {
        FixedValues {
            x_is_constant: false,
            y_is_constant: false,
            z_is_constant: false,
            px_is_constant: false,
            py_is_constant: false,
            pz_is_constant: false,
            weight_is_constant: false,
            constant_x: 0.0,
            constant_y: 0.0,
            constant_z: 0.0,
            constant_px: 0.0,
            constant_py: 0.0,
            constant_pz: 0.0,
            constant_weight: 1.0,
        }
    }
}

/// A single simulated particle crossing a scoring surface.
#[derive(Debug, Clone)]
pub struct Particle {
    particle_type: ParticleType,
    kinetic_energy: f32,
    x: f32,
    y: f32,
    z: f32,
    px: f32,
    py: f32,
    pz: f32,
    weight: f32,
    new_history: bool,
    int_props: PropertyBag<IntPropertyType, i32>,
    float_props: PropertyBag<FloatPropertyType, f32>,
    bool_props: PropertyBag<BoolPropertyType, bool>,
    custom_strings: Vec<String>,
}

impl Particle {
    /// Builds a particle, normalizing the direction cosine to unit length.
    pub fn new(
        particle_type: ParticleType,
        kinetic_energy: f32,
        x: f32,
        y: f32,
        z: f32,
        px: f32,
        py: f32,
        pz: f32,
        new_history: bool,
        weight: f32,
    ) -> Particle {
        let mut particle = Particle {
            particle_type,
            kinetic_energy,
            x,
            y,
            z,
            px,
            py,
            pz,
            weight,
            new_history,
            int_props: PropertyBag::default(),
            float_props: PropertyBag::default(),
            bool_props: PropertyBag::default(),
            custom_strings: Vec::new(),
        };
        particle.normalize_direction();
        particle
    }

    fn normalize_direction(&mut self) {
        let magnitude = self.px * self.px + self.py * self.py + self.pz * self.pz;
        if magnitude == 0.0 || magnitude == 1.0 {
            return;
        }
        let magnitude = magnitude.sqrt();
        self.px /= magnitude;
        self.py /= magnitude;
        self.pz /= magnitude;
    }

    /// The particle's type tag.
    pub fn particle_type(&self) -> ParticleType {
        self.particle_type
    }

    /// Sets the particle's type tag.
    pub fn set_particle_type(&mut self, particle_type: ParticleType) {
        self.particle_type = particle_type;
    }

    /// Kinetic energy in MeV.
    pub fn kinetic_energy(&self) -> f32 {
        self.kinetic_energy
    }

    /// Sets the kinetic energy in MeV.
    pub fn set_kinetic_energy(&mut self, energy: f32) {
        self.kinetic_energy = energy;
    }

    /// Position X coordinate, in cm.
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Position Y coordinate, in cm.
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Position Z coordinate, in cm.
    pub fn z(&self) -> f32 {
        self.z
    }

    /// Sets the position X coordinate.
    pub fn set_x(&mut self, x: f32) {
        self.x = x;
    }

    /// Sets the position Y coordinate.
    pub fn set_y(&mut self, y: f32) {
        self.y = y;
    }

    /// Sets the position Z coordinate.
    pub fn set_z(&mut self, z: f32) {
        self.z = z;
    }

    /// Direction cosine along X.
    pub fn px(&self) -> f32 {
        self.px
    }

    /// Direction cosine along Y.
    pub fn py(&self) -> f32 {
        self.py
    }

    /// Direction cosine along Z.
    pub fn pz(&self) -> f32 {
        self.pz
    }

    /// Sets the direction cosine along X. Does not renormalize; callers that
    /// need a unit vector should reconstruct all three components together.
    pub fn set_px(&mut self, px: f32) {
        self.px = px;
    }

    /// Sets the direction cosine along Y. Does not renormalize.
    pub fn set_py(&mut self, py: f32) {
        self.py = py;
    }

    /// Sets the direction cosine along Z. Does not renormalize.
    pub fn set_pz(&mut self, pz: f32) {
        self.pz = pz;
    }

    /// Statistical weight.
    pub fn weight(&self) -> f32 {
        self.weight
    }

    /// Sets the statistical weight.
    pub fn set_weight(&mut self, weight: f32) {
        self.weight = weight;
    }

    /// Whether this particle begins a new simulated history.
    pub fn is_new_history(&self) -> bool {
        self.new_history
    }

    /// Sets the new-history flag.
    pub fn set_new_history(&mut self, new_history: bool) {
        self.new_history = new_history;
    }

    /// Sets the explicit incremental-history count; implies `new_history = true`.
    pub fn set_incremental_histories(&mut self, count: u32) -> crate::error::Result<()> {
        if count == 0 {
            return Err(crate::error::Error::InvalidProperty {
                name: "incremental_histories",
                detail: "must be greater than 0".to_string(),
            });
        }
        self.new_history = true;
        self.int_props
            .set(IntPropertyType::IncrementalHistoryNumber, count as i32);
        Ok(())
    }

    /// The number of original histories folded into this particle: the stored
    /// `IncrementalHistoryNumber` if present, else `1` for a new history, else `0`.
    pub fn incremental_histories(&self) -> u32 {
        if !self.new_history {
            return 0;
        }
        match self.int_props.get(IntPropertyType::IncrementalHistoryNumber) {
            Some(value) => value as u32,
            None => 1,
        }
    }

    /// Whether `key` has a stored value on this particle.
    pub fn has_int_property(&self, key: IntPropertyType) -> bool {
        self.int_props.has(key)
    }

    /// Reads the int property `key`, if set.
    pub fn int_property(&self, key: IntPropertyType) -> Option<i32> {
        self.int_props.get(key)
    }

    /// Sets the int property `key`.
    pub fn set_int_property(&mut self, key: IntPropertyType, value: i32) {
        self.int_props.set(key, value);
    }

    /// Appends an anonymous custom int value.
    pub fn push_custom_int(&mut self, value: i32) {
        self.int_props.push_custom(value);
    }

    /// Whether `key` has a stored value on this particle.
    pub fn has_float_property(&self, key: FloatPropertyType) -> bool {
        self.float_props.has(key)
    }

    /// Reads the float property `key`, if set.
    pub fn float_property(&self, key: FloatPropertyType) -> Option<f32> {
        self.float_props.get(key)
    }

    /// Sets the float property `key`.
    pub fn set_float_property(&mut self, key: FloatPropertyType, value: f32) {
        self.float_props.set(key, value);
    }

    /// Appends an anonymous custom float value.
    pub fn push_custom_float(&mut self, value: f32) {
        self.float_props.push_custom(value);
    }

    /// Whether `key` has a stored value on this particle.
    pub fn has_bool_property(&self, key: BoolPropertyType) -> bool {
        self.bool_props.has(key)
    }

    /// Reads the bool property `key`, if set.
    pub fn bool_property(&self, key: BoolPropertyType) -> Option<bool> {
        self.bool_props.get(key)
    }

    /// Sets the bool property `key`.
    pub fn set_bool_property(&mut self, key: BoolPropertyType, value: bool) {
        self.bool_props.set(key, value);
    }

    /// Appends an anonymous custom bool value.
    pub fn push_custom_bool(&mut self, value: bool) {
        self.bool_props.push_custom(value);
    }

    /// Appends an anonymous custom string value.
    pub fn push_custom_string(&mut self, value: String) {
        self.custom_strings.push(value);
    }

    /// The anonymous custom string values pushed so far.
    pub fn custom_strings(&self) -> &[String] {
        &self.custom_strings
    }

    /// Number of int properties set (fixed keys plus custom values).
    pub fn num_int_properties(&self) -> usize {
        self.int_props.len()
    }

    /// Number of float properties set (fixed keys plus custom values).
    pub fn num_float_properties(&self) -> usize {
        self.float_props.len()
    }

    /// Number of bool properties set (fixed keys plus custom values).
    pub fn num_bool_properties(&self) -> usize {
        self.bool_props.len()
    }

    /// Advances (x,y) to the plane `X = value` along the direction cosine, returning
    /// `false` when the particle's trajectory doesn't carry it across that plane.
    pub fn project_to_x(&mut self, value: f32) -> bool {
        if self.x == value {
            return true;
        }
        if self.px.abs() < 1e-6 {
            return false;
        }
        let t = (value - self.x) / self.px;
        self.x = value;
        self.y += self.py * t;
        self.z += self.pz * t;
        true
    }

    /// Advances (y,x) to the plane `Y = value`; see [`Particle::project_to_x`].
    pub fn project_to_y(&mut self, value: f32) -> bool {
        if self.y == value {
            return true;
        }
        if self.py.abs() < 1e-6 {
            return false;
        }
        let t = (value - self.y) / self.py;
        self.y = value;
        self.x += self.px * t;
        self.z += self.pz * t;
        true
    }

    /// Advances (z,x) to the plane `Z = value`; see [`Particle::project_to_x`].
    pub fn project_to_z(&mut self, value: f32) -> bool {
        if self.z == value {
            return true;
        }
        if self.pz.abs() < 1e-6 {
            return false;
        }
        let t = (value - self.z) / self.pz;
        self.z = value;
        self.x += self.px * t;
        self.y += self.py * t;
        true
    }
}

/// Reconstructs the third direction cosine from the other two, given as stored
/// in a codec that only carries two of the three on disk.
///
/// When `u^2 + v^2` exceeds 1 due to floating-point drift, both are renormalized
/// to unit length and the third component is taken to be exactly tangential (0).
pub fn calc_third_unit_component(u: &mut f32, v: &mut f32) -> f32 {
    let uuvv = u.mul_add(*u, *v * *v);
    if uuvv > 1.0 {
        let norm_factor = 1.0 / uuvv.sqrt();
        *u *= norm_factor;
        *v *= norm_factor;
        return 0.0;
    }
    if uuvv == 1.0 {
        return 0.0;
    }
    (1.0 - uuvv).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdg::ParticleType;

    #[test]
    fn normalizes_direction_on_construction() {
        let p = Particle::new(ParticleType::Photon, 1.0, 0.0, 0.0, 0.0, 3.0, 4.0, 0.0, true, 1.0);
        let norm = p.px() * p.px() + p.py() * p.py() + p.pz() * p.pz();
        assert!((norm - 1.0).abs() < 1e-6);
    }

    #[test]
    fn incremental_histories_defaults_to_one_when_new() {
        let p = Particle::new(ParticleType::Photon, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, true, 1.0);
        assert_eq!(p.incremental_histories(), 1);
    }

    #[test]
    fn incremental_histories_zero_when_not_new() {
        let p = Particle::new(ParticleType::Photon, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, false, 1.0);
        assert_eq!(p.incremental_histories(), 0);
    }

    #[test]
    fn explicit_incremental_histories_overrides_default() {
        let mut p = Particle::new(ParticleType::Photon, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, true, 1.0);
        p.set_incremental_histories(5).unwrap();
        assert_eq!(p.incremental_histories(), 5);
    }

    #[test]
    fn third_unit_component_standard_case() {
        let mut u = 0.6f32;
        let mut v = 0.0f32;
        let w = calc_third_unit_component(&mut u, &mut v);
        assert!((w - 0.8).abs() < 1e-6);
    }

    #[test]
    fn third_unit_component_renormalizes_on_overflow() {
        let mut u = 0.8f32;
        let mut v = 0.8f32;
        let w = calc_third_unit_component(&mut u, &mut v);
        assert_eq!(w, 0.0);
        assert!((u * u + v * v - 1.0).abs() < 1e-5);
    }
}
