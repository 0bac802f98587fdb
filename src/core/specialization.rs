use crate::models::Specialization;
use std::collections::HashMap;

use crate::models::Specialization::{
    ChronicPain, ManualTherapy, NeurologicalRehabilitation, PostSurgical, SportsRehabilitation,
    StrengthConditioning,
};

/// Lookup from pain area to the specializations able to treat it
///
/// Keys are stored lowercased. Areas without an entry resolve to the
/// fallback set.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecializationMap {
    areas: HashMap<String, Vec<Specialization>>,
    fallback: Vec<Specialization>,
}

impl SpecializationMap {
    pub fn new(
        areas: impl IntoIterator<Item = (String, Vec<Specialization>)>,
        fallback: Vec<Specialization>,
    ) -> Self {
        let areas = areas
            .into_iter()
            .map(|(area, specializations)| (area.to_lowercase(), specializations))
            .collect();

        Self { areas, fallback }
    }

    /// Specializations for `pain_area`, falling back when it is unknown
    pub fn lookup(&self, pain_area: &str) -> &[Specialization] {
        self.areas
            .get(&pain_area.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&self.fallback)
    }

    pub fn is_known(&self, pain_area: &str) -> bool {
        self.areas.contains_key(&pain_area.to_lowercase())
    }

    pub fn fallback(&self) -> &[Specialization] {
        &self.fallback
    }
}

impl Default for SpecializationMap {
    fn default() -> Self {
        let table: [(&str, &[Specialization]); 9] = [
            ("knee", &[SportsRehabilitation, PostSurgical, ManualTherapy]),
            ("back", &[ChronicPain, ManualTherapy, StrengthConditioning]),
            ("neck", &[ManualTherapy, ChronicPain]),
            ("shoulder", &[SportsRehabilitation, ManualTherapy, PostSurgical]),
            ("elbow", &[SportsRehabilitation, ManualTherapy]),
            ("wrist", &[ManualTherapy, PostSurgical]),
            ("hip", &[PostSurgical, StrengthConditioning, ChronicPain]),
            ("ankle", &[SportsRehabilitation, PostSurgical]),
            ("head", &[NeurologicalRehabilitation, ManualTherapy]),
        ];

        Self::new(
            table
                .iter()
                .map(|(area, specializations)| (area.to_string(), specializations.to_vec())),
            vec![ManualTherapy, ChronicPain],
        )
    }
}
