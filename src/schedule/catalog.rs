//! Embedded condition catalog.

/// A condition from the rating schedule with the levels it can be rated at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScheduledCondition {
    /// Catalog name, e.g. `"Lumbar Strain"`.
    pub name: &'static str,

    /// ICD-10-CM code.
    pub icd10: &'static str,

    pub description: &'static str,

    /// Disability Benefits Questionnaire used for the examination.
    pub exam_form: &'static str,

    /// Percentages the schedule assigns, ascending.
    pub levels: &'static [u8],
}

macro_rules! condition {
    ($name:literal, $icd:literal, $desc:literal, $form:literal, [$($level:literal),+]) => {
        ScheduledCondition {
            name: $name,
            icd10: $icd,
            description: $desc,
            exam_form: $form,
            levels: &[$($level),+],
        }
    };
}

pub(super) static CONDITIONS: &[ScheduledCondition] = &[
    // Mental health
    condition!("PTSD", "F43.10", "Post-Traumatic Stress Disorder", "Mental Disorders DBQ", [0, 10, 30, 50, 70, 100]),
    condition!("Major Depression", "F33.1", "Major Depressive Disorder, Recurrent", "Mental Disorders DBQ", [0, 10, 30, 50, 70, 100]),
    condition!("Generalized Anxiety", "F41.1", "Generalized Anxiety Disorder", "Mental Disorders DBQ", [0, 10, 30, 50, 70, 100]),
    condition!("TBI", "S06.2X0S", "Traumatic Brain Injury, Residuals", "TBI DBQ", [0, 10, 40, 70, 100]),
    // Musculoskeletal
    condition!("Lumbar Strain", "M54.5", "Lumbosacral Strain with DDD", "Back (Thoracolumbar Spine) DBQ", [0, 10, 20, 40]),
    condition!("Cervical Strain", "M54.2", "Cervical Spine Strain", "Neck (Cervical Spine) DBQ", [0, 10, 20, 30]),
    condition!("Right Knee Strain", "S83.91XS", "Right Knee Patellofemoral Pain Syndrome", "Knee and Lower Leg DBQ", [0, 10, 20, 30]),
    condition!("Left Knee Strain", "S83.92XS", "Left Knee Patellofemoral Pain Syndrome", "Knee and Lower Leg DBQ", [0, 10, 20, 30]),
    condition!("Right Shoulder Strain", "M25.511", "Right Shoulder Impingement Syndrome", "Shoulder and Arm DBQ", [0, 10, 20]),
    condition!("Left Shoulder Strain", "M25.512", "Left Shoulder Impingement Syndrome", "Shoulder and Arm DBQ", [0, 10, 20]),
    condition!("Bilateral Plantar Fasciitis", "M72.2", "Bilateral Plantar Fasciitis", "Foot DBQ", [0, 10, 20, 30]),
    // Hearing
    condition!("Tinnitus", "H93.11", "Tinnitus, Bilateral", "Ear Conditions DBQ", [10]),
    condition!("Hearing Loss", "H90.3", "Bilateral Sensorineural Hearing Loss", "Hearing Loss and Tinnitus DBQ", [0, 10, 20, 30, 40, 50]),
    // Respiratory
    condition!("Sleep Apnea", "G47.33", "Obstructive Sleep Apnea", "Sleep Apnea DBQ", [0, 30, 50, 100]),
    condition!("Sinusitis", "J32.9", "Chronic Sinusitis", "Sinusitis/Rhinitis DBQ", [0, 10, 30, 50]),
    condition!("Asthma", "J45.909", "Bronchial Asthma", "Respiratory DBQ", [0, 10, 30, 60, 100]),
    // Digestive
    condition!("GERD", "K21.9", "Gastroesophageal Reflux Disease", "Esophageal Conditions DBQ", [0, 10, 30, 60]),
    condition!("IBS", "K58.9", "Irritable Bowel Syndrome", "Intestinal Conditions DBQ", [0, 10, 30]),
    // Skin
    condition!("Eczema", "L30.9", "Atopic Dermatitis/Eczema", "Skin Diseases DBQ", [0, 10, 30, 60]),
    // Cardiovascular
    condition!("Hypertension", "I10", "Essential Hypertension", "Hypertension DBQ", [0, 10, 20, 40, 60]),
    // Neurological
    condition!("Migraines", "G43.909", "Migraine Headaches", "Headaches DBQ", [0, 10, 30, 50]),
    condition!("Peripheral Neuropathy", "G90.09", "Peripheral Neuropathy", "Peripheral Nerves DBQ", [0, 10, 20, 40]),
    condition!("Radiculopathy Lumbar", "M54.16", "Lumbar Radiculopathy", "Back (Thoracolumbar Spine) DBQ", [0, 10, 20, 40]),
    condition!("Radiculopathy Cervical", "M54.12", "Cervical Radiculopathy", "Neck (Cervical Spine) DBQ", [0, 10, 20, 40]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_sorted_and_canonical() {
        for condition in CONDITIONS {
            assert!(
                condition.levels.windows(2).all(|w| w[0] < w[1]),
                "{} levels not ascending",
                condition.name
            );
            assert!(
                condition.levels.iter().all(|&l| l <= 100 && l % 10 == 0),
                "{} has an off-grid level",
                condition.name
            );
        }
    }

    #[test]
    fn test_names_are_unique() {
        for (i, a) in CONDITIONS.iter().enumerate() {
            for b in &CONDITIONS[i + 1..] {
                assert!(!a.name.eq_ignore_ascii_case(b.name), "duplicate {}", a.name);
            }
        }
    }
}
