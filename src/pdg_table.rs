//! The PDG code/name catalog for every species beyond the common set `ParticleType`
//! gives its own variant — the long tail of quarks, gauge bosons, hadron resonances,
//! hypernuclei, and light-ion isotopes a Monte-Carlo transport code can still stamp
//! onto a TOPAS phase-space record. Grounded on the `PARTICLE_LIST` table in
//! `particlezoo/PDGParticleCodes.h`.
//!
//! Kept as a flat table rather than one enum variant per entry: the catalog this
//! file backs runs into the hundreds, almost none of which the writer formats need
//! to special-case the way they special-case photons/electrons/positrons. A linear
//! scan is fine here — the table is only walked a handful of times per file, when a
//! TOPAS header is parsed or rendered.

/// `(PDG code, geant4-style snake_case name)`, one row per `PARTICLE_LIST` entry
/// not already covered by a named [`crate::pdg::ParticleType`] variant.
pub(crate) static PDG_TABLE: &[(i32, &str)] = &[
    (1, "down_quark"),
    (2, "up_quark"),
    (3, "strange_quark"),
    (4, "charm_quark"),
    (5, "bottom_quark"),
    (6, "top_quark"),
    (-1, "anti_down_quark"),
    (-2, "anti_up_quark"),
    (-3, "anti_strange_quark"),
    (-4, "anti_charm_quark"),
    (-5, "anti_bottom_quark"),
    (-6, "anti_top_quark"),
    (7, "b_prime_quark"),
    (-7, "anti_b_prime_quark"),
    (8, "t_prime_quark"),
    (-8, "anti_t_prime_quark"),
    (11, "electron"),
    (-11, "positron"),
    (12, "electron_neutrino"),
    (-12, "anti_electron_neutrino"),
    (13, "muon"),
    (-13, "anti_muon"),
    (14, "muon_neutrino"),
    (-14, "anti_muon_neutrino"),
    (15, "tau"),
    (-15, "anti_tau"),
    (16, "tau_neutrino"),
    (-16, "anti_tau_neutrino"),
    (17, "tau_prime"),
    (-17, "anti_tau_prime"),
    (18, "tau_prime_neutrino"),
    (-18, "anti_tau_prime_neutrino"),
    (21, "gluon"),
    (22, "photon"),
    (23, "z_boson"),
    (24, "w_boson"),
    (-24, "anti_w_boson"),
    (25, "higgs_boson"),
    (32, "z_prime_boson"),
    (33, "z_double_prime_boson"),
    (34, "w_prime_boson"),
    (-34, "anti_w_prime_boson"),
    (35, "neutral_higgs_boson"),
    (36, "pseudoscalar_higgs_boson"),
    (37, "charged_higgs_boson"),
    (-37, "anti_charged_higgs_boson"),
    (1103, "diquark_dd_1"),
    (-1103, "anti_diquark_dd_1"),
    (2101, "diquark_ud_0"),
    (-2101, "anti_diquark_ud_0"),
    (2103, "diquark_ud_1"),
    (-2103, "anti_diquark_ud_1"),
    (2203, "diquark_uu_1"),
    (-2203, "anti_diquark_uu_1"),
    (3101, "diquark_sd_0"),
    (-3101, "anti_diquark_sd_0"),
    (3103, "diquark_sd_1"),
    (-3103, "anti_diquark_sd_1"),
    (3201, "diquark_su_0"),
    (-3201, "anti_diquark_su_0"),
    (3203, "diquark_su_1"),
    (-3203, "anti_diquark_su_1"),
    (3303, "diquark_ss_1"),
    (-3303, "anti_diquark_ss_1"),
    (4101, "diquark_cd_0"),
    (-4101, "anti_diquark_cd_0"),
    (4103, "diquark_cd_1"),
    (-4103, "anti_diquark_cd_1"),
    (4201, "diquark_cu_0"),
    (-4201, "anti_diquark_cu_0"),
    (4203, "diquark_cu_1"),
    (-4203, "anti_diquark_cu_1"),
    (4301, "diquark_cs_0"),
    (-4301, "anti_diquark_cs_0"),
    (4303, "diquark_cs_1"),
    (-4303, "anti_diquark_cs_1"),
    (4403, "diquark_cc_1"),
    (-4403, "anti_diquark_cc_1"),
    (5101, "diquark_bd_0"),
    (-5101, "anti_diquark_bd_0"),
    (5103, "diquark_bd_1"),
    (-5103, "anti_diquark_bd_1"),
    (5201, "diquark_bu_0"),
    (-5201, "anti_diquark_bu_0"),
    (5203, "diquark_bu_1"),
    (-5203, "anti_diquark_bu_1"),
    (5301, "diquark_bs_0"),
    (-5301, "anti_diquark_bs_0"),
    (5303, "diquark_bs_1"),
    (-5303, "anti_diquark_bs_1"),
    (5401, "diquark_bc_0"),
    (-5401, "anti_diquark_bc_0"),
    (5403, "diquark_bc_1"),
    (-5403, "anti_diquark_bc_1"),
    (5503, "diquark_bb_1"),
    (-5503, "anti_diquark_bb_1"),
    (111, "pion_zero"),
    (211, "pion_plus"),
    (-211, "anti_pion_plus"),
    (9000111, "a0_980_zero"),
    (9000211, "a0_980_plus"),
    (-9000211, "anti_a0_980_plus"),
    (100111, "pi_1300_zero"),
    (100211, "pi_1300_plus"),
    (-100211, "anti_pi_1300_plus"),
    (10111, "a0_1450_zero"),
    (10211, "a0_1450_plus"),
    (-10211, "anti_a0_1450_plus"),
    (9010111, "pi_1800_zero"),
    (9010211, "pi_1800_plus"),
    (-9010211, "anti_pi_1800_plus"),
    (113, "rho_770_zero"),
    (213, "rho_770_plus"),
    (-213, "anti_rho_770_plus"),
    (10113, "b1_1235_zero"),
    (10213, "b1_1235_plus"),
    (-10213, "anti_b1_1235_plus"),
    (20113, "a1_1260_zero"),
    (20213, "a1_1260_plus"),
    (-20213, "anti_a1_1260_plus"),
    (9000113, "pi1_1400_zero"),
    (9000213, "pi1_1400_plus"),
    (-9000213, "anti_pi1_1400_plus"),
    (100113, "rho_1450_zero"),
    (100213, "rho_1450_plus"),
    (-100213, "anti_rho_1450_plus"),
    (9010113, "pi1_1600_zero"),
    (9010213, "pi1_1600_plus"),
    (-9010213, "anti_pi1_1600_plus"),
    (9020113, "a1_1640_zero"),
    (9020213, "a1_1640_plus"),
    (-9020213, "anti_a1_1640_plus"),
    (30113, "rho_1700_zero"),
    (30213, "rho_1700_plus"),
    (-30213, "anti_rho_1700_plus"),
    (9030113, "rho_1900_zero"),
    (9030213, "rho_1900_plus"),
    (-9030213, "anti_rho_1900_plus"),
    (9040113, "rho_2150_zero"),
    (9040213, "rho_2150_plus"),
    (-9040213, "anti_rho_2150_plus"),
    (115, "a2_1320_zero"),
    (215, "a2_1320_plus"),
    (-215, "anti_a2_1320_plus"),
    (10115, "pi2_1670_zero"),
    (10215, "pi2_1670_plus"),
    (-10215, "anti_pi2_1670_plus"),
    (9000115, "a2_1700_zero"),
    (9000215, "a2_1700_plus"),
    (-9000215, "anti_a2_1700_plus"),
    (9010115, "pi2_2100_zero"),
    (9010215, "pi2_2100_plus"),
    (-9010215, "anti_pi2_2100_plus"),
    (117, "rho3_1690_zero"),
    (217, "rho3_1690_plus"),
    (-217, "anti_rho3_1690_plus"),
    (9000117, "rho3_1990_zero"),
    (9000217, "rho3_1990_plus"),
    (-9000217, "anti_rho3_1990_plus"),
    (9010117, "rho3_2250_zero"),
    (9010217, "rho3_2250_plus"),
    (-9010217, "anti_rho3_2250_plus"),
    (119, "a4_2040_zero"),
    (219, "a4_2040_plus"),
    (-219, "anti_a4_2040_plus"),
    (221, "eta"),
    (331, "eta_prime_958"),
    (9000221, "f0_600"),
    (9010221, "f0_980"),
    (100221, "eta_1295"),
    (10221, "f0_1370"),
    (9020221, "eta_1405"),
    (100331, "eta_1475"),
    (9030221, "f0_1500"),
    (10331, "f0_1710"),
    (9040221, "eta_1760"),
    (9050221, "f0_2020"),
    (9060221, "f0_2100"),
    (9070221, "f0_2200"),
    (9080221, "eta_2225"),
    (223, "omega_782"),
    (333, "phi_1020"),
    (10223, "h1_1170"),
    (20223, "f1_1285"),
    (10333, "h1_1380"),
    (20333, "f1_1420"),
    (100223, "omega_1420"),
    (9000223, "f1_1510"),
    (9010223, "h1_1595"),
    (30223, "omega_1650"),
    (100333, "phi_1680"),
    (225, "f2_1270"),
    (9000225, "f2_1430"),
    (335, "f2_1525"),
    (9010225, "f2_1565"),
    (9020225, "f2_1640"),
    (10225, "eta2_1645"),
    (9030225, "f2_1810"),
    (10335, "eta2_1870"),
    (9040225, "f2_1910"),
    (9050225, "f2_1950"),
    (9060225, "f2_2010"),
    (9070225, "f2_2150"),
    (9080225, "f2_2300"),
    (9090225, "f2_2340"),
    (227, "omega3_1670"),
    (337, "phi3_1850"),
    (229, "f4_2050"),
    (9000229, "f4_2220"),
    (9010229, "f4_2300"),
    (2212, "proton"),
    (-2212, "anti_proton"),
    (2112, "neutron"),
    (-2112, "anti_neutron"),
    (2224, "delta_plus_plus"),
    (-2224, "anti_delta_plus_plus"),
    (2214, "delta_plus"),
    (-2214, "anti_delta_plus"),
    (2114, "delta_zero"),
    (-2114, "anti_delta_zero"),
    (1114, "delta_minus"),
    (-1114, "anti_delta_minus"),
    (3122, "lambda"),
    (-3122, "anti_lambda"),
    (3222, "sigma_plus"),
    (-3222, "anti_sigma_plus"),
    (3212, "sigma_zero"),
    (-3212, "anti_sigma_zero"),
    (3112, "sigma_minus"),
    (-3112, "anti_sigma_minus"),
    (3224, "sigma_star_plus"),
    (-3224, "anti_sigma_star_plus"),
    (3214, "sigma_star_zero"),
    (-3214, "anti_sigma_star_zero"),
    (3114, "sigma_star_minus"),
    (-3114, "anti_sigma_star_minus"),
    (3322, "xi_zero"),
    (-3322, "anti_xi_zero"),
    (3312, "xi_minus"),
    (-3312, "anti_xi_minus"),
    (3324, "xi_star_zero"),
    (-3324, "anti_xi_star_zero"),
    (3314, "xi_star_minus"),
    (-3314, "anti_xi_star_minus"),
    (3334, "omega_minus"),
    (-3334, "anti_omega_minus"),
    (4122, "lambda_c_plus"),
    (-4122, "anti_lambda_c_plus"),
    (4222, "sigma_c_plus_plus"),
    (-4222, "anti_sigma_c_plus_plus"),
    (4212, "sigma_c_plus"),
    (-4212, "anti_sigma_c_plus"),
    (4112, "sigma_c_zero"),
    (-4112, "anti_sigma_c_zero"),
    (4224, "sigma_c_star_plus_plus"),
    (-4224, "anti_sigma_c_star_plus_plus"),
    (4214, "sigma_c_star_plus"),
    (-4214, "anti_sigma_c_star_plus"),
    (4114, "sigma_c_star_zero"),
    (-4114, "anti_sigma_c_star_zero"),
    (4232, "xi_c_plus"),
    (-4232, "anti_xi_c_plus"),
    (4132, "xi_c_zero"),
    (-4132, "anti_xi_c_zero"),
    (4322, "xi_c_prime_plus"),
    (-4322, "anti_xi_c_prime_plus"),
    (4312, "xi_c_prime_zero"),
    (-4312, "anti_xi_c_prime_zero"),
    (4324, "xi_c_star_plus"),
    (-4324, "anti_xi_c_star_plus"),
    (4314, "xi_c_star_zero"),
    (-4314, "anti_xi_c_star_zero"),
    (4332, "omega_c_zero"),
    (-4332, "anti_omega_c_zero"),
    (4334, "omega_c_star_zero"),
    (-4334, "anti_omega_c_star_zero"),
    (4412, "xi_cc_plus_plus"),
    (-4412, "anti_xi_cc_plus_plus"),
    (4422, "xi_cc_plus"),
    (-4422, "anti_xi_cc_plus"),
    (4414, "xi_cc_star_plus"),
    (-4414, "anti_xi_cc_star_plus"),
    (4424, "xi_cc_star_plus_plus"),
    (-4424, "anti_xi_cc_star_plus_plus"),
    (4432, "omega_cc_plus"),
    (-4432, "anti_omega_cc_plus"),
    (4434, "omega_cc_star_plus"),
    (-4434, "anti_omega_cc_star_plus"),
    (4444, "omega_ccc_plus_plus"),
    (-4444, "anti_omega_ccc_plus_plus"),
    (5122, "lambda_b_zero"),
    (-5122, "anti_lambda_b_zero"),
    (5212, "sigma_b_zero"),
    (-5212, "anti_sigma_b_zero"),
    (5222, "sigma_b_plus"),
    (-5222, "anti_sigma_b_plus"),
    (5112, "sigma_b_minus"),
    (-5112, "anti_sigma_b_minus"),
    (5214, "sigma_b_star_zero"),
    (-5214, "anti_sigma_b_star_zero"),
    (5224, "sigma_b_star_plus"),
    (-5224, "anti_sigma_b_star_plus"),
    (5132, "xi_b_zero"),
    (-5132, "anti_xi_b_zero"),
    (5232, "xi_b_minus"),
    (-5232, "anti_xi_b_minus"),
    (5312, "xi_b_prime_zero"),
    (-5312, "anti_xi_b_prime_zero"),
    (5322, "xi_b_prime_minus"),
    (-5322, "anti_xi_b_prime_minus"),
    (5314, "xi_b_star_zero"),
    (-5314, "anti_xi_b_star_zero"),
    (5324, "xi_b_star_minus"),
    (-5324, "anti_xi_b_star_minus"),
    (5332, "omega_b_minus"),
    (-5332, "anti_omega_b_minus"),
    (5334, "omega_b_star_minus"),
    (-5334, "anti_omega_b_star_minus"),
    (5142, "xi_bc_zero"),
    (-5142, "anti_xi_bc_zero"),
    (5242, "xi_bc_plus"),
    (-5242, "anti_xi_bc_plus"),
    (5412, "xi_bc_prime_zero"),
    (-5412, "anti_xi_bc_prime_zero"),
    (5422, "xi_bc_prime_plus"),
    (-5422, "anti_xi_bc_prime_plus"),
    (5414, "xi_bc_star_zero"),
    (-5414, "anti_xi_bc_star_zero"),
    (5424, "xi_bc_star_plus"),
    (-5424, "anti_xi_bc_star_plus"),
    (5342, "omega_bc_zero"),
    (-5342, "anti_omega_bc_zero"),
    (5432, "omega_bc_prime_zero"),
    (-5432, "anti_omega_bc_prime_zero"),
    (5434, "omega_bc_star_zero"),
    (-5434, "anti_omega_bc_star_zero"),
    (5442, "omega_bcc_plus"),
    (-5442, "anti_omega_bcc_plus"),
    (5444, "omega_bcc_star_plus"),
    (-5444, "anti_omega_bcc_star_plus"),
    (5512, "xi_bb_zero"),
    (-5512, "anti_xi_bb_zero"),
    (5522, "xi_bb_minus"),
    (-5522, "anti_xi_bb_minus"),
    (5514, "xi_bb_star_zero"),
    (-5514, "anti_xi_bb_star_zero"),
    (5524, "xi_bb_star_minus"),
    (-5524, "anti_xi_bb_star_minus"),
    (5532, "omega_bb_minus"),
    (-5532, "anti_omega_bb_minus"),
    (5534, "omega_bb_star_minus"),
    (-5534, "anti_omega_bb_star_minus"),
    (5542, "omega_bbc_zero"),
    (-5542, "anti_omega_bbc_zero"),
    (5544, "omega_bbc_star_zero"),
    (-5544, "anti_omega_bbc_star_zero"),
    (5554, "omega_bbb_minus"),
    (-5554, "anti_omega_bbb_minus"),
    (1000001, "squark_d_l"),
    (-1000001, "anti_squark_d_l"),
    (1000002, "squark_u_l"),
    (-1000002, "anti_squark_u_l"),
    (1000003, "squark_s_l"),
    (-1000003, "anti_squark_s_l"),
    (1000004, "squark_c_l"),
    (-1000004, "anti_squark_c_l"),
    (1000005, "squark_b_1"),
    (-1000005, "anti_squark_b_1"),
    (1000006, "squark_t_1"),
    (-1000006, "anti_squark_t_1"),
    (1000011, "selectron_l"),
    (-1000011, "anti_selectron_l"),
    (1000012, "sneutrino_e_l"),
    (-1000012, "anti_sneutrino_e_l"),
    (1000013, "smuon_l"),
    (-1000013, "anti_smuon_l"),
    (1000014, "sneutrino_mu_l"),
    (-1000014, "anti_sneutrino_mu_l"),
    (1000015, "stau_1"),
    (-1000015, "anti_stau_1"),
    (1000016, "sneutrino_tau_l"),
    (-1000016, "anti_sneutrino_tau_l"),
    (2000001, "squark_d_r"),
    (-2000001, "anti_squark_d_r"),
    (2000002, "squark_u_r"),
    (-2000002, "anti_squark_u_r"),
    (2000003, "squark_s_r"),
    (-2000003, "anti_squark_s_r"),
    (2000004, "squark_c_r"),
    (-2000004, "anti_squark_c_r"),
    (2000005, "squark_b_2"),
    (-2000005, "anti_squark_b_2"),
    (2000006, "squark_t_2"),
    (-2000006, "anti_squark_t_2"),
    (2000011, "selectron_r"),
    (-2000011, "anti_selectron_r"),
    (2000013, "smuon_r"),
    (-2000013, "anti_smuon_r"),
    (2000015, "stau_2"),
    (-2000015, "anti_stau_2"),
    (1000021, "gluino"),
    (1000022, "neutralino1"),
    (1000023, "neutralino2"),
    (1000024, "chargino1_plus"),
    (-1000024, "anti_chargino1_plus"),
    (1000025, "neutralino3"),
    (1000035, "neutralino4"),
    (1000037, "chargino2_plus"),
    (-1000037, "anti_chargino2_plus"),
    (1000039, "gravitino"),
    (3000111, "techni_pi_zero"),
    (3000211, "techni_pi_plus"),
    (-3000211, "anti_techni_pi_plus"),
    (3000221, "techni_pi_prime_zero"),
    (3100221, "techni_eta_zero"),
    (3000113, "techni_rho_zero"),
    (3000213, "techni_rho_plus"),
    (-3000213, "anti_techni_rho_plus"),
    (3000223, "techni_omega_zero"),
    (3100021, "techni_v8"),
    (3060111, "techni_pi22_1"),
    (3160111, "techni_pi22_8"),
    (3130113, "techni_rho11"),
    (3140113, "techni_rho12"),
    (3150113, "techni_rho21"),
    (3160113, "techni_rho22"),
    (1000993, "r_hadron_g_g"),
    (1009113, "r_hadron_g_dd_bar"),
    (1009213, "r_hadron_g_ud_bar_plus"),
    (-1009213, "anti_r_hadron_g_ud_bar_plus"),
    (1009223, "r_hadron_g_uu_bar"),
    (1009313, "r_hadron_g_ds_bar"),
    (-1009313, "anti_r_hadron_g_ds_bar"),
    (1009323, "r_hadron_g_us_bar_plus"),
    (-1009323, "anti_r_hadron_g_us_bar_plus"),
    (1009333, "r_hadron_g_ss_bar"),
    (1091114, "r_hadron_g_ddd"),
    (-1091114, "anti_r_hadron_g_ddd"),
    (1092114, "r_hadron_g_udd_plus"),
    (-1092114, "anti_r_hadron_g_udd_plus"),
    (1092214, "r_hadron_g_uud_plus_plus"),
    (-1092214, "anti_r_hadron_g_uud_plus_plus"),
    (1092224, "r_hadron_g_uuu_plus_plus"),
    (-1092224, "anti_r_hadron_g_uuu_plus_plus"),
    (1093114, "r_hadron_g_sdd"),
    (-1093114, "anti_r_hadron_g_sdd"),
    (1093214, "r_hadron_g_sud_plus"),
    (-1093214, "anti_r_hadron_g_sud_plus"),
    (1093314, "r_hadron_g_suu_plus_plus"),
    (-1093314, "anti_r_hadron_g_suu_plus_plus"),
    (1093324, "r_hadron_g_ssd_plus"),
    (-1093324, "anti_r_hadron_g_ssd_plus"),
    (1093334, "r_hadron_g_sss"),
    (-1093334, "anti_r_hadron_g_sss"),
    (1000612, "r_hadron_t1_t1_bar"),
    (1000622, "r_hadron_t1_d_bar"),
    (-1000622, "anti_r_hadron_t1_d_bar"),
    (1000632, "r_hadron_t1_s_bar"),
    (-1000632, "anti_r_hadron_t1_s_bar"),
    (1000642, "r_hadron_t1_b_bar"),
    (-1000642, "anti_r_hadron_t1_b_bar"),
    (1000652, "r_hadron_t1_u_bar_plus"),
    (-1000652, "anti_r_hadron_t1_u_bar_plus"),
    (1006113, "r_hadron_t1_dd1"),
    (-1006113, "anti_r_hadron_t1_dd1"),
    (1006211, "r_hadron_t1_ud0_plus"),
    (-1006211, "anti_r_hadron_t1_ud0_plus"),
    (1006213, "r_hadron_t1_ud1_plus"),
    (-1006213, "anti_r_hadron_t1_ud1_plus"),
    (1006223, "r_hadron_t1_uu1_plus_plus"),
    (-1006223, "anti_r_hadron_t1_uu1_plus_plus"),
    (1006311, "r_hadron_t1_sd0"),
    (-1006311, "anti_r_hadron_t1_sd0"),
    (1006313, "r_hadron_t1_sd1"),
    (-1006313, "anti_r_hadron_t1_sd1"),
    (1006321, "r_hadron_t1_su0_plus"),
    (-1006321, "anti_r_hadron_t1_su0_plus"),
    (1006323, "r_hadron_t1_su1_plus"),
    (-1006323, "anti_r_hadron_t1_su1_plus"),
    (1006333, "r_hadron_t1_ss1"),
    (-1006333, "anti_r_hadron_t1_ss1"),
    (130, "kaon_long"),
    (310, "kaon_short"),
    (311, "kaon_zero"),
    (-311, "anti_kaon_zero"),
    (321, "kaon_plus"),
    (-321, "anti_kaon_plus"),
    (9000311, "k0_star_800_zero"),
    (-9000311, "anti_k0_star_800_zero"),
    (9000321, "k0_star_800_plus"),
    (-9000321, "anti_k0_star_800_plus"),
    (10311, "k0_star_1430_zero"),
    (-10311, "anti_k0_star_1430_zero"),
    (10321, "k0_star_1430_plus"),
    (-10321, "anti_k0_star_1430_plus"),
    (100311, "k_1460_zero"),
    (-100311, "anti_k_1460_zero"),
    (100321, "k_1460_plus"),
    (-100321, "anti_k_1460_plus"),
    (9010311, "k_1830_zero"),
    (-9010311, "anti_k_1830_zero"),
    (9010321, "k_1830_plus"),
    (-9010321, "anti_k_1830_plus"),
    (9020311, "k0_star_1950_zero"),
    (-9020311, "anti_k0_star_1950_zero"),
    (9020321, "k0_star_1950_plus"),
    (-9020321, "anti_k0_star_1950_plus"),
    (313, "k_star_892_zero"),
    (-313, "anti_k_star_892_zero"),
    (323, "k_star_892_plus"),
    (-323, "anti_k_star_892_plus"),
    (10313, "k1_1270_zero"),
    (-10313, "anti_k1_1270_zero"),
    (10323, "k1_1270_plus"),
    (-10323, "anti_k1_1270_plus"),
    (20313, "k1_1400_zero"),
    (-20313, "anti_k1_1400_zero"),
    (20323, "k1_1400_plus"),
    (-20323, "anti_k1_1400_plus"),
    (100313, "k_star_1410_zero"),
    (-100313, "anti_k_star_1410_zero"),
    (100323, "k_star_1410_plus"),
    (-100323, "anti_k_star_1410_plus"),
    (9000313, "k1_1650_zero"),
    (-9000313, "anti_k1_1650_zero"),
    (9000323, "k1_1650_plus"),
    (-9000323, "anti_k1_1650_plus"),
    (30313, "k_star_1680_zero"),
    (-30313, "anti_k_star_1680_zero"),
    (30323, "k_star_1680_plus"),
    (-30323, "anti_k_star_1680_plus"),
    (315, "k2_star_1430_zero"),
    (-315, "anti_k2_star_1430_zero"),
    (325, "k2_star_1430_plus"),
    (-325, "anti_k2_star_1430_plus"),
    (9000315, "k2_1580_zero"),
    (-9000315, "anti_k2_1580_zero"),
    (9000325, "k2_1580_plus"),
    (-9000325, "anti_k2_1580_plus"),
    (10315, "k2_1770_zero"),
    (-10315, "anti_k2_1770_zero"),
    (10325, "k2_1770_plus"),
    (-10325, "anti_k2_1770_plus"),
    (20315, "k2_1820_zero"),
    (-20315, "anti_k2_1820_zero"),
    (20325, "k2_1820_plus"),
    (-20325, "anti_k2_1820_plus"),
    (9010315, "k2_1980_zero"),
    (-9010315, "anti_k2_1980_zero"),
    (9010325, "k2_1980_plus"),
    (-9010325, "anti_k2_1980_plus"),
    (9020315, "k2_2250_zero"),
    (-9020315, "anti_k2_2250_zero"),
    (9020325, "k2_2250_plus"),
    (-9020325, "anti_k2_2250_plus"),
    (317, "k3_star_1780_zero"),
    (-317, "anti_k3_star_1780_zero"),
    (327, "k3_star_1780_plus"),
    (-327, "anti_k3_star_1780_plus"),
    (9010317, "k3_2320_zero"),
    (-9010317, "anti_k3_2320_zero"),
    (9010327, "k3_2320_plus"),
    (-9010327, "anti_k3_2320_plus"),
    (319, "k4_star_2045_zero"),
    (-319, "anti_k4_star_2045_zero"),
    (329, "k4_star_2045_plus"),
    (-329, "anti_k4_star_2045_plus"),
    (9000319, "k4_2500_zero"),
    (-9000319, "anti_k4_2500_zero"),
    (9000329, "k4_2500_plus"),
    (-9000329, "anti_k4_2500_plus"),
    (411, "d_plus"),
    (-411, "anti_d_plus"),
    (421, "d_zero"),
    (-421, "anti_d_zero"),
    (10411, "d0_star_2400_plus"),
    (-10411, "anti_d0_star_2400_plus"),
    (10421, "d0_star_2400_zero"),
    (-10421, "anti_d0_star_2400_zero"),
    (413, "d_star_2010_plus"),
    (-413, "anti_d_star_2010_plus"),
    (423, "d_star_2007_zero"),
    (-423, "anti_d_star_2007_zero"),
    (10413, "d1_2420_plus"),
    (-10413, "anti_d1_2420_plus"),
    (10423, "d1_2420_zero"),
    (-10423, "anti_d1_2420_zero"),
    (20413, "d1_h_plus"),
    (-20413, "anti_d1_h_plus"),
    (20423, "d1_2430_zero"),
    (-20423, "anti_d1_2430_zero"),
    (415, "d2_star_2460_plus"),
    (-415, "anti_d2_star_2460_plus"),
    (425, "d2_star_2460_zero"),
    (-425, "anti_d2_star_2460_zero"),
    (431, "ds_plus"),
    (-431, "anti_ds_plus"),
    (10431, "ds0_star_2317_plus"),
    (-10431, "anti_ds0_star_2317_plus"),
    (433, "ds_star_plus"),
    (-433, "anti_ds_star_plus"),
    (10433, "ds1_2536_plus"),
    (-10433, "anti_ds1_2536_plus"),
    (20433, "ds1_2460_plus"),
    (-20433, "anti_ds1_2460_plus"),
    (435, "ds2_2573_plus"),
    (-435, "anti_ds2_2573_plus"),
    (511, "b_zero"),
    (-511, "anti_b_zero"),
    (521, "b_plus"),
    (-521, "anti_b_plus"),
    (10511, "b0_star_zero"),
    (-10511, "anti_b0_star_zero"),
    (10521, "b0_star_plus"),
    (-10521, "anti_b0_star_plus"),
    (513, "b_star_zero"),
    (-513, "anti_b_star_zero"),
    (523, "b_star_plus"),
    (-523, "anti_b_star_plus"),
    (10513, "b1_l_zero"),
    (-10513, "anti_b1_l_zero"),
    (10523, "b1_l_plus"),
    (-10523, "anti_b1_l_plus"),
    (20513, "b1_h_zero"),
    (-20513, "anti_b1_h_zero"),
    (20523, "b1_h_plus"),
    (-20523, "anti_b1_h_plus"),
    (515, "b2_star_zero"),
    (-515, "anti_b2_star_zero"),
    (525, "b2_star_plus"),
    (-525, "anti_b2_star_plus"),
    (531, "bs_zero"),
    (-531, "anti_bs_zero"),
    (10531, "bs0_star_zero"),
    (-10531, "anti_bs0_star_zero"),
    (533, "bs_star_zero"),
    (-533, "anti_bs_star_zero"),
    (10533, "bs1_l_zero"),
    (-10533, "anti_bs1_l_zero"),
    (20533, "bs1_h_zero"),
    (-20533, "anti_bs1_h_zero"),
    (535, "bs2_star_zero"),
    (-535, "anti_bs2_star_zero"),
    (541, "bc_plus"),
    (-541, "anti_bc_plus"),
    (10541, "bc0_star_plus"),
    (-10541, "anti_bc0_star_plus"),
    (543, "bc_star_plus"),
    (-543, "anti_bc_star_plus"),
    (10543, "bc1_l_plus"),
    (-10543, "anti_bc1_l_plus"),
    (20543, "bc1_h_plus"),
    (-20543, "anti_bc1_h_plus"),
    (545, "bc2_star_plus"),
    (-545, "anti_bc2_star_plus"),
    (441, "eta_c_1_s"),
    (10441, "chi_c0_1_p"),
    (100441, "eta_c_2_s"),
    (443, "j_psi_1_s"),
    (10443, "h_c_1_p"),
    (20443, "chi_c1_1_p"),
    (100443, "psi_2_s"),
    (30443, "psi_3770"),
    (9000443, "psi_4040"),
    (9010443, "psi_4160"),
    (9020443, "psi_4415"),
    (445, "chi_c2_1_p"),
    (100445, "chi_c2_2_p"),
    (551, "eta_b_1_s"),
    (10551, "chi_b0_1_p"),
    (100551, "eta_b_2_s"),
    (110551, "chi_b0_2_p"),
    (200551, "eta_b_3_s"),
    (210551, "chi_b0_3_p"),
    (553, "upsilon_1_s"),
    (10553, "h_b_1_p"),
    (20553, "chi_b1_1_p"),
    (30553, "upsilon1_1_d"),
    (100553, "upsilon_2_s"),
    (110553, "h_b_2_p"),
    (120553, "chi_b1_2_p"),
    (130553, "upsilon1_2_d"),
    (200553, "upsilon_3_s"),
    (210553, "h_b_3_p"),
    (220553, "chi_b1_3_p"),
    (300553, "upsilon_4_s"),
    (9000553, "upsilon_10860"),
    (9010553, "upsilon_11020"),
    (555, "chi_b2_1_p"),
    (10555, "eta_b2_1_d"),
    (20555, "upsilon2_1_d"),
    (100555, "chi_b2_2_p"),
    (110555, "eta_b2_2_d"),
    (120555, "upsilon2_2_d"),
    (200555, "chi_b2_3_p"),
    (557, "upsilon3_1_d"),
    (100557, "upsilon3_2_d"),
    (9221132, "theta_plus"),
    (-9221132, "anti_theta_plus"),
    (9331122, "phi_minus_minus"),
    (-9331122, "anti_phi_minus_minus"),
    (4000001, "excited_down_quark"),
    (4000002, "excited_up_quark"),
    (4000011, "excited_electron"),
    (4000012, "excited_electron_neutrino"),
    (-4000001, "excited_anti_down_quark"),
    (-4000002, "excited_anti_up_quark"),
    (-4000011, "excited_positron"),
    (-4000012, "excited_anti_electron_neutrino"),
    (39, "graviton"),
    (41, "r_hadron"),
    (42, "leptoquark"),
    (110, "reggeon"),
    (990, "pomeron"),
    (9990, "odderon"),
    (1000010020, "deuteron"),
    (-1000010020, "anti_deuteron"),
    (1000010030, "triton"),
    (-1000010030, "anti_triton"),
    (1000020030, "helium3_nucleus"),
    (-1000020030, "anti_helium3_nucleus"),
    (1000020040, "helium_nucleus"),
    (-1000020040, "anti_helium_nucleus"),
    (1000030060, "lithium6_nucleus"),
    (-1000030060, "anti_lithium6_nucleus"),
    (1000030070, "lithium7_nucleus"),
    (-1000030070, "anti_lithium7_nucleus"),
    (1000040070, "beryllium7_nucleus"),
    (-1000040070, "anti_beryllium7_nucleus"),
    (1000040090, "beryllium9_nucleus"),
    (-1000040090, "anti_beryllium9_nucleus"),
    (1000050100, "boron10_nucleus"),
    (-1000050100, "anti_boron10_nucleus"),
    (1000050110, "boron11_nucleus"),
    (-1000050110, "anti_boron11_nucleus"),
    (1000060110, "carbon11_nucleus"),
    (-1000060110, "anti_carbon11_nucleus"),
    (1000060120, "carbon_nucleus"),
    (-1000060120, "anti_carbon_nucleus"),
    (1000070140, "nitrogen14_nucleus"),
    (-1000070140, "anti_nitrogen14_nucleus"),
    (1000080150, "oxygen15_nucleus"),
    (-1000080150, "anti_oxygen15_nucleus"),
    (1000080160, "oxygen_nucleus"),
    (-1000080160, "anti_oxygen_nucleus"),
];
