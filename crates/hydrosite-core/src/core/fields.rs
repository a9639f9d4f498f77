//! Column layouts of the GIST and HSA per-site summary tables.
//!
//! Both schemes are flat, positional tables: the meaning of a value is given
//! entirely by its column. The constants here name every column, the `TITLES`
//! arrays give the canonical header order, and the phf maps resolve a header
//! string back to its column index without any runtime table construction.

/// Column layout of a GIST summary table.
///
/// Columns alternate between density-weighted (`*_DENS`) and
/// per-water-normalized (`*_NORM`) variants of each quantity.
pub mod gist {
    pub const INDEX: usize = 0;
    pub const X: usize = 1;
    pub const Y: usize = 2;
    pub const Z: usize = 3;
    pub const N_WAT: usize = 4;
    pub const G_O: usize = 5;
    pub const G_H: usize = 6;
    pub const TS_TR_DENS: usize = 7;
    pub const TS_TR_NORM: usize = 8;
    pub const TS_OR_DENS: usize = 9;
    pub const TS_OR_NORM: usize = 10;
    pub const DTS_SIX_DENS: usize = 11;
    pub const DTS_SIX_NORM: usize = 12;
    pub const E_SW_DENS: usize = 13;
    pub const E_SW_NORM: usize = 14;
    pub const E_WW_DENS: usize = 15;
    pub const E_WW_NORM: usize = 16;
    pub const E_WW_NBR_DENS: usize = 17;
    pub const E_WW_NBR_NORM: usize = 18;
    pub const N_NBR_DENS: usize = 19;
    pub const N_NBR_NORM: usize = 20;
    pub const F_HB_DENS: usize = 21;
    pub const F_HB_NORM: usize = 22;
    pub const N_HB_SW_DENS: usize = 23;
    pub const N_HB_SW_NORM: usize = 24;
    pub const N_HB_WW_DENS: usize = 25;
    pub const N_HB_WW_NORM: usize = 26;
    pub const N_DON_SW_DENS: usize = 27;
    pub const N_DON_SW_NORM: usize = 28;
    pub const N_ACC_SW_DENS: usize = 29;
    pub const N_ACC_SW_NORM: usize = 30;
    pub const N_DON_WW_DENS: usize = 31;
    pub const N_DON_WW_NORM: usize = 32;
    pub const N_ACC_WW_DENS: usize = 33;
    pub const N_ACC_WW_NORM: usize = 34;

    /// Canonical header order of a GIST summary table.
    pub static TITLES: [&str; 35] = [
        "index",
        "x",
        "y",
        "z",
        "N_wat",
        "g_O",
        "g_H",
        "TS_tr_dens",
        "TS_tr_norm",
        "TS_or_dens",
        "TS_or_norm",
        "dTSsix-dens",
        "dTSsix_norm",
        "E_sw_dens",
        "E_sw_norm",
        "E_ww_dens",
        "Eww_norm",
        "E_ww_nbr_dens",
        "E_ww_nbr_norm",
        "N_nbr_dens",
        "N_nbr_norm",
        "f_hb_dens",
        "f_hb_norm",
        "N_hb_sw_dens",
        "N_hb_sw_norm",
        "N_hb_ww_dens",
        "N_hb_ww_norm",
        "N_don_sw_dens",
        "N_don_sw_norm",
        "N_acc_sw_dens",
        "N_acc_sw_norm",
        "N_don_ww_dens",
        "N_don_ww_norm",
        "N_acc_ww_dens",
        "N_acc_ww_norm",
    ];

    /// Header title to column index.
    pub static BY_NAME: phf::Map<&'static str, usize> = phf::phf_map! {
        "index" => 0,
        "x" => 1,
        "y" => 2,
        "z" => 3,
        "N_wat" => 4,
        "g_O" => 5,
        "g_H" => 6,
        "TS_tr_dens" => 7,
        "TS_tr_norm" => 8,
        "TS_or_dens" => 9,
        "TS_or_norm" => 10,
        "dTSsix-dens" => 11,
        "dTSsix_norm" => 12,
        "E_sw_dens" => 13,
        "E_sw_norm" => 14,
        "E_ww_dens" => 15,
        "Eww_norm" => 16,
        "E_ww_nbr_dens" => 17,
        "E_ww_nbr_norm" => 18,
        "N_nbr_dens" => 19,
        "N_nbr_norm" => 20,
        "f_hb_dens" => 21,
        "f_hb_norm" => 22,
        "N_hb_sw_dens" => 23,
        "N_hb_sw_norm" => 24,
        "N_hb_ww_dens" => 25,
        "N_hb_ww_norm" => 26,
        "N_don_sw_dens" => 27,
        "N_don_sw_norm" => 28,
        "N_acc_sw_dens" => 29,
        "N_acc_sw_norm" => 30,
        "N_don_ww_dens" => 31,
        "N_don_ww_norm" => 32,
        "N_acc_ww_dens" => 33,
        "N_acc_ww_norm" => 34,
    };
}

/// Column layout of an HSA summary table.
pub mod hsa {
    pub const INDEX: usize = 0;
    pub const X: usize = 1;
    pub const Y: usize = 2;
    pub const Z: usize = 3;
    pub const N_WAT: usize = 4;
    pub const OCCUPANCY: usize = 5;
    pub const E_SW: usize = 6;
    pub const E_SW_LJ: usize = 7;
    pub const E_SW_ELEC: usize = 8;
    pub const E_WW: usize = 9;
    pub const E_WW_LJ: usize = 10;
    pub const E_WW_ELEC: usize = 11;
    pub const E_TOT: usize = 12;
    pub const E_WW_NBR: usize = 13;
    pub const TS_SW_TRANS: usize = 14;
    pub const TS_SW_ORIENT: usize = 15;
    pub const TS_TOT: usize = 16;
    pub const N_NBRS: usize = 17;
    pub const N_HB_WW: usize = 18;
    pub const N_HB_SW: usize = 19;
    pub const N_HB_TOT: usize = 20;
    pub const F_HB_WW: usize = 21;
    pub const F_ENC: usize = 22;
    pub const ACC_WW: usize = 23;
    pub const DON_WW: usize = 24;
    pub const ACC_SW: usize = 25;
    pub const DON_SW: usize = 26;
    pub const SOLUTE_ACCEPTORS: usize = 27;
    pub const SOLUTE_DONORS: usize = 28;

    /// Canonical header order of an HSA summary table.
    pub static TITLES: [&str; 29] = [
        "index",
        "x",
        "y",
        "z",
        "nwat",
        "occupancy",
        "Esw",
        "EswLJ",
        "EswElec",
        "Eww",
        "EwwLJ",
        "EwwElec",
        "Etot",
        "Ewwnbr",
        "TSsw_trans",
        "TSsw_orient",
        "TStot",
        "Nnbrs",
        "Nhbww",
        "Nhbsw",
        "Nhbtot",
        "f_hb_ww",
        "f_enc",
        "Acc_ww",
        "Don_ww",
        "Acc_sw",
        "Don_sw",
        "solute_acceptors",
        "solute_donors",
    ];

    /// Header title to column index.
    pub static BY_NAME: phf::Map<&'static str, usize> = phf::phf_map! {
        "index" => 0,
        "x" => 1,
        "y" => 2,
        "z" => 3,
        "nwat" => 4,
        "occupancy" => 5,
        "Esw" => 6,
        "EswLJ" => 7,
        "EswElec" => 8,
        "Eww" => 9,
        "EwwLJ" => 10,
        "EwwElec" => 11,
        "Etot" => 12,
        "Ewwnbr" => 13,
        "TSsw_trans" => 14,
        "TSsw_orient" => 15,
        "TStot" => 16,
        "Nnbrs" => 17,
        "Nhbww" => 18,
        "Nhbsw" => 19,
        "Nhbtot" => 20,
        "f_hb_ww" => 21,
        "f_enc" => 22,
        "Acc_ww" => 23,
        "Don_ww" => 24,
        "Acc_sw" => 25,
        "Don_sw" => 26,
        "solute_acceptors" => 27,
        "solute_donors" => 28,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gist_titles_and_constants_agree() {
        assert_eq!(gist::TITLES.len(), 35);
        assert_eq!(gist::TITLES[gist::INDEX], "index");
        assert_eq!(gist::TITLES[gist::E_WW_NBR_NORM], "E_ww_nbr_norm");
        assert_eq!(gist::TITLES[gist::N_ACC_WW_NORM], "N_acc_ww_norm");
    }

    #[test]
    fn hsa_titles_and_constants_agree() {
        assert_eq!(hsa::TITLES.len(), 29);
        assert_eq!(hsa::TITLES[hsa::OCCUPANCY], "occupancy");
        assert_eq!(hsa::TITLES[hsa::E_WW_NBR], "Ewwnbr");
        assert_eq!(hsa::TITLES[hsa::SOLUTE_DONORS], "solute_donors");
    }

    #[test]
    fn every_title_resolves_to_its_column() {
        for (i, title) in gist::TITLES.iter().enumerate() {
            assert_eq!(gist::BY_NAME.get(title), Some(&i), "GIST column {title}");
        }
        for (i, title) in hsa::TITLES.iter().enumerate() {
            assert_eq!(hsa::BY_NAME.get(title), Some(&i), "HSA column {title}");
        }
    }

    #[test]
    fn unknown_names_do_not_resolve() {
        assert!(gist::BY_NAME.get("Esw").is_none());
        assert!(hsa::BY_NAME.get("g_O").is_none());
    }
}
