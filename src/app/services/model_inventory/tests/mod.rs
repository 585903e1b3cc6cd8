//! Test utilities for the model inventory

use crate::app::services::field_registry::{
    BasinParameter, ControlParameter, GroundwaterParameter, HruParameter, ManagementParameter,
    RoutingParameter, SubbasinParameter,
};
use crate::app::services::file_manipulator::tests::{ModelDir, SoilProfile, hru_header, scalar_file};


/// `file.cio` with the given simulation settings
pub fn control_text(nbyr: u32, iyr: i32, iprint: u32, nyskip: u32) -> String {
    scalar_file(
        " Master Watershed File: file.cio",
        &[
            (ControlParameter::Nbyr, nbyr.to_string().as_str()),
            (ControlParameter::Iyr, iyr.to_string().as_str()),
            (ControlParameter::Iprint, iprint.to_string().as_str()),
            (ControlParameter::Nyskip, nyskip.to_string().as_str()),
        ],
    )
}

/// One subbasin with one agricultural HRU, plus an urban soil and the
/// output files SWAT leaves next to the inputs
pub fn small_model() -> ModelDir {
    let model = ModelDir::new();

    model.write("file.cio", &control_text(5, 2000, 1, 2));
    model.write("basins.bsn", &scalar_file::<BasinParameter>(" Basin data", &[]));
    model.write(
        "000010000.sub",
        &scalar_file(
            " .sub file Subbasin: 1 1/1/2020 12:00:00 AM ArcSWAT 2012.10_4.19",
            &[(SubbasinParameter::SubKm, "12.500000")],
        ),
    );
    model.write(
        "000010001.hru",
        &scalar_file(&hru_header("hru", 1, "AGRL"), &[(HruParameter::HruFr, "0.4000000")]),
    );
    model.write(
        "000010001.gw",
        &scalar_file::<GroundwaterParameter>(&hru_header("gw", 1, "AGRL"), &[]),
    );
    model.write(
        "000010001.mgt",
        &scalar_file(&hru_header("mgt", 1, "AGRL"), &[(ManagementParameter::Cn2, "77.000")]),
    );
    model.write(
        "000010001.rte",
        &scalar_file::<RoutingParameter>(" .rte file Subbasin: 1", &[]),
    );
    model.write("000010001.sol", &SoilProfile::loam().text());

    let mut urban = SoilProfile::loam();
    urban.landuse = "URBN";
    model.write("000010002.sol", &urban.text());

    model.write("output.hru", "not an input file\n");
    model.write("output.sub", "not an input file\n");
    model
}
