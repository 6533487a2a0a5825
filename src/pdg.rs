//! The closed particle-type catalog and the unit constants codecs convert against.
//!
//! The species a phase-space scoring surface actually produces in bulk — photons,
//! electrons, positrons, neutrons, protons, and the handful of other hadrons and
//! leptons transport codes commonly track — get their own named variant, since
//! those are the ones the binary codecs (EGS's LATCH charge bits, IAEA/penEasy's
//! compact type codes) special-case directly. TOPAS (C8) instead stores a raw PDG
//! code per record, so the catalog still has to decode the long tail: everything
//! else PDG assigns a code to comes back as [`ParticleType::Other`], backed by the
//! [`crate::pdg_table`] lookup table, rather than falling over into
//! [`ParticleType::Unsupported`]. `Unsupported` is reserved for codes the table
//! itself doesn't recognize, and [`ParticleType::PseudoParticle`] for TOPAS's
//! empty-history marker record.

/// A particle species, tagged by its PDG Monte Carlo numbering scheme code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticleType {
    /// PDG 22.
    Photon,
    /// PDG 11.
    Electron,
    /// PDG -11.
    Positron,
    /// PDG 2112.
    Neutron,
    /// PDG 2212.
    Proton,
    /// PDG -2212.
    AntiProton,
    /// PDG 13.
    MuonMinus,
    /// PDG -13.
    MuonPlus,
    /// PDG 15.
    TauMinus,
    /// PDG -15.
    TauPlus,
    /// PDG 12.
    NeutrinoE,
    /// PDG -12.
    AntiNeutrinoE,
    /// PDG 14.
    NeutrinoMu,
    /// PDG -14.
    AntiNeutrinoMu,
    /// PDG 211.
    PionPlus,
    /// PDG -211.
    PionMinus,
    /// PDG 111.
    PionZero,
    /// PDG 321.
    KaonPlus,
    /// PDG -321.
    KaonMinus,
    /// PDG 311.
    KaonZero,
    /// PDG 130.
    KaonZeroLong,
    /// PDG 310.
    KaonZeroShort,
    /// PDG 1000010020.
    Deuteron,
    /// PDG 1000010030.
    Triton,
    /// PDG 1000020030.
    Helium3,
    /// PDG 1000020040.
    Alpha,
    /// Synonym for [`ParticleType::Photon`] used by some EGS-heritage tooling.
    Gamma,
    /// PDG -2112.
    AntiNeutron,
    /// PDG 3122.
    Lambda,
    /// PDG -3122.
    AntiLambda,
    /// Decoded, but outside the set this library's catalog recognizes.
    Unsupported,
    /// Sentinel for TOPAS's empty-history marker record; never a "real" particle.
    PseudoParticle,
    /// Any other PDG-catalog species, carried by its numeric code directly. Looked
    /// up against `crate::pdg_table::PDG_TABLE` for its name; see the module docs.
    Other(i32),
}

impl ParticleType {
    /// The signed PDG Monte Carlo code, or `None` for the two sentinel types.
    pub fn pdg_code(self) -> Option<i32> {
        use ParticleType::*;
        Some(match self {
            Gamma | Photon => 22,
            Electron => 11,
            Positron => -11,
            Neutron => 2112,
            AntiNeutron => -2112,
            Proton => 2212,
            AntiProton => -2212,
            MuonMinus => 13,
            MuonPlus => -13,
            TauMinus => 15,
            TauPlus => -15,
            NeutrinoE => 12,
            AntiNeutrinoE => -12,
            NeutrinoMu => 14,
            AntiNeutrinoMu => -14,
            PionPlus => 211,
            PionMinus => -211,
            PionZero => 111,
            KaonPlus => 321,
            KaonMinus => -321,
            KaonZero => 311,
            KaonZeroLong => 130,
            KaonZeroShort => 310,
            Deuteron => 1000010020,
            Triton => 1000010030,
            Helium3 => 1000020030,
            Alpha => 1000020040,
            Lambda => 3122,
            AntiLambda => -3122,
            Other(code) => code,
            Unsupported | PseudoParticle => return None,
        })
    }

    /// Looks up a type by its PDG code. Codes outside the named variants above are
    /// checked against [`crate::pdg_table::PDG_TABLE`] and returned as
    /// [`ParticleType::Other`]; codes in neither map to [`ParticleType::Unsupported`].
    /// `0` maps to [`ParticleType::PseudoParticle`], TOPAS/IAEA's shared convention for
    /// "not a real particle".
    pub fn from_pdg_code(code: i32) -> ParticleType {
        use ParticleType::*;
        match code {
            0 => PseudoParticle,
            22 => Photon,
            11 => Electron,
            -11 => Positron,
            2112 => Neutron,
            -2112 => AntiNeutron,
            2212 => Proton,
            -2212 => AntiProton,
            13 => MuonMinus,
            -13 => MuonPlus,
            15 => TauMinus,
            -15 => TauPlus,
            12 => NeutrinoE,
            -12 => AntiNeutrinoE,
            14 => NeutrinoMu,
            -14 => AntiNeutrinoMu,
            211 => PionPlus,
            -211 => PionMinus,
            111 => PionZero,
            321 => KaonPlus,
            -321 => KaonMinus,
            311 => KaonZero,
            130 => KaonZeroLong,
            310 => KaonZeroShort,
            1000010020 => Deuteron,
            1000010030 => Triton,
            1000020030 => Helium3,
            1000020040 => Alpha,
            3122 => Lambda,
            -3122 => AntiLambda,
            _ => match crate::pdg_table::PDG_TABLE.iter().find(|(c, _)| *c == code) {
                Some((c, _)) => Other(*c),
                None => Unsupported,
            },
        }
    }

    /// IAEA/TOPAS-LIMITED/EGS share a small signed magnitude catalog for their
    /// compact per-record type codes: `1`=Photon, `2`=Electron, `3`=Positron,
    /// `4`=Neutron, `5`=Proton. The sign of the magnitude, separately, encodes the
    /// sign of `w` in those formats (see [`crate::particle`]).
    pub fn from_iaea_magnitude(magnitude: i8) -> ParticleType {
        match magnitude {
            1 => ParticleType::Photon,
            2 => ParticleType::Electron,
            3 => ParticleType::Positron,
            4 => ParticleType::Neutron,
            5 => ParticleType::Proton,
            _ => ParticleType::Unsupported,
        }
    }

    /// Inverse of [`ParticleType::from_iaea_magnitude`]; `None` for types the
    /// IAEA/TOPAS-LIMITED/EGS compact schemas cannot carry.
    pub fn to_iaea_magnitude(self) -> Option<i8> {
        match self {
            ParticleType::Photon => Some(1),
            ParticleType::Electron => Some(2),
            ParticleType::Positron => Some(3),
            ParticleType::Neutron => Some(4),
            ParticleType::Proton => Some(5),
            _ => None,
        }
    }

    /// penEasy's four-species KPAR catalog: `1`=Electron, `2`=Photon, `3`=Positron, `4`=Proton.
    pub fn from_penelope_kpar(kpar: i32) -> ParticleType {
        match kpar {
            1 => ParticleType::Electron,
            2 => ParticleType::Photon,
            3 => ParticleType::Positron,
            4 => ParticleType::Proton,
            _ => ParticleType::Unsupported,
        }
    }

    /// Inverse of [`ParticleType::from_penelope_kpar`]; `None` outside that catalog.
    pub fn to_penelope_kpar(self) -> Option<i32> {
        match self {
            ParticleType::Electron => Some(1),
            ParticleType::Photon => Some(2),
            ParticleType::Positron => Some(3),
            ParticleType::Proton => Some(4),
            _ => None,
        }
    }

    /// Geant4's particle name, as used in TOPAS headers (`Number of <name>: <k>`).
    pub fn geant4_name(self) -> &'static str {
        use ParticleType::*;
        match self {
            Gamma | Photon => "gamma",
            Electron => "e-",
            Positron => "e+",
            Neutron => "neutron",
            AntiNeutron => "anti_neutron",
            Proton => "proton",
            AntiProton => "anti_proton",
            MuonMinus => "mu-",
            MuonPlus => "mu+",
            TauMinus => "tau-",
            TauPlus => "tau+",
            NeutrinoE => "nu_e",
            AntiNeutrinoE => "anti_nu_e",
            NeutrinoMu => "nu_mu",
            AntiNeutrinoMu => "anti_nu_mu",
            PionPlus => "pi+",
            PionMinus => "pi-",
            PionZero => "pi0",
            KaonPlus => "kaon+",
            KaonMinus => "kaon-",
            KaonZero => "kaon0",
            KaonZeroLong => "kaon0L",
            KaonZeroShort => "kaon0S",
            Deuteron => "deuteron",
            Triton => "triton",
            Helium3 => "He3",
            Alpha => "alpha",
            Lambda => "lambda",
            AntiLambda => "anti_lambda",
            Unsupported => "unsupported",
            PseudoParticle => "pseudo",
            Other(code) => crate::pdg_table::PDG_TABLE
                .iter()
                .find(|(c, _)| *c == code)
                .map(|(_, name)| *name)
                .unwrap_or("unsupported"),
        }
    }

    /// Reverse of [`ParticleType::geant4_name`]; names from [`crate::pdg_table::PDG_TABLE`]
    /// come back as [`ParticleType::Other`]; anything else is `Unsupported`.
    pub fn from_geant4_name(name: &str) -> ParticleType {
        use ParticleType::*;
        match name {
            "gamma" => Photon,
            "e-" => Electron,
            "e+" => Positron,
            "neutron" => Neutron,
            "anti_neutron" => AntiNeutron,
            "proton" => Proton,
            "anti_proton" => AntiProton,
            "mu-" => MuonMinus,
            "mu+" => MuonPlus,
            "tau-" => TauMinus,
            "tau+" => TauPlus,
            "nu_e" => NeutrinoE,
            "anti_nu_e" => AntiNeutrinoE,
            "nu_mu" => NeutrinoMu,
            "anti_nu_mu" => AntiNeutrinoMu,
            "pi+" => PionPlus,
            "pi-" => PionMinus,
            "pi0" => PionZero,
            "kaon+" => KaonPlus,
            "kaon-" => KaonMinus,
            "kaon0" => KaonZero,
            "kaon0L" => KaonZeroLong,
            "kaon0S" => KaonZeroShort,
            "deuteron" => Deuteron,
            "triton" => Triton,
            "He3" => Helium3,
            "alpha" => Alpha,
            "lambda" => Lambda,
            "anti_lambda" => AntiLambda,
            "pseudo" => PseudoParticle,
            _ => match crate::pdg_table::PDG_TABLE.iter().find(|(_, n)| *n == name) {
                Some((code, _)) => Other(*code),
                None => Unsupported,
            },
        }
    }
}

/// Rest mass of the electron/positron, in MeV. EGS phase-space files store total
/// energy for charged particles; this is the constant subtracted/added to recover
/// kinetic energy (§4.5).
pub const ELECTRON_REST_MASS_MEV: f32 = 0.510999;

/// Conversion factor from eV (penEasy's on-disk energy unit) to MeV (internal unit).
pub const EV_TO_MEV: f32 = 1.0e-6;
