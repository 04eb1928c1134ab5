//! Studio module.
//!
//! Lead-generation flows around the catalog: the custom formula builder,
//! seller launch submissions and wizard, and the simulated face scan.

mod face_scan;
mod formula;
mod launch;
mod wizard;

pub use face_scan::{
    recommend, FaceScan, FixedDetector, RandomDetector, ScanResult, ScanStage, SkinTypeDetector,
    MAX_RECOMMENDATIONS, SCAN_DURATION,
};
pub use formula::{CustomFormula, FinalizedFormula, FormulaTier, MAX_FORMULA_INGREDIENTS};
pub use launch::{
    LaunchForm, LaunchSubmission, ManufacturingType, MAX_PRODUCT_NAME_LEN, SUBMIT_DELAY,
};
pub use wizard::{
    FocusArea, KeyIngredient, LaunchWizard, ProductForm, StepStatus, WizardDraft, WizardStep,
    MAX_SKIN_SENSITIVITY,
};
