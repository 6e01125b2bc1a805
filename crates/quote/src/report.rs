//! Plain-text model report offered as a download from the viewer.

use chrono::{DateTime, Utc};
use mesh_types::ModelInfo;

/// `bracket.stl` becomes `bracket_report.txt`. Only the first `.stl` is
/// removed, and the match is case-sensitive.
pub fn report_file_name(file_name: &str) -> String {
    format!("{}_report.txt", file_name.replacen(".stl", "", 1))
}

/// `1234567` becomes `1,234,567`.
fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelReport {
    pub info: ModelInfo,
    pub generated_at: DateTime<Utc>,
}

impl ModelReport {
    pub fn new(info: ModelInfo, generated_at: DateTime<Utc>) -> Self {
        Self { info, generated_at }
    }

    /// Report stamped with the current time.
    pub fn now(info: ModelInfo) -> Self {
        Self::new(info, Utc::now())
    }

    pub fn file_name(&self) -> String {
        report_file_name(&self.info.file_name)
    }

    pub fn to_text(&self) -> String {
        let info = &self.info;
        let dims = &info.bounding_box;
        let lines = vec![
            "3D Model Analysis Report".to_string(),
            "========================".to_string(),
            String::new(),
            "File Information:".to_string(),
            format!("- Name: {}", info.file_name),
            format!("- Size: {:.2} MB", info.file_meta().size_mb()),
            String::new(),
            "Geometry:".to_string(),
            format!("- Vertices: {}", group_thousands(info.vertex_count)),
            format!("- Faces: {}", group_thousands(info.face_count)),
            String::new(),
            "Dimensions (mm):".to_string(),
            format!("- Width (X): {}", dims.x),
            format!("- Depth (Y): {}", dims.y),
            format!("- Height (Z): {}", dims.z),
            String::new(),
            "Calculations:".to_string(),
            format!("- Volume: {} cm³", info.volume),
            format!("- Surface Area: {} cm²", info.surface_area),
            String::new(),
            format!(
                "Generated on: {}",
                self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
            ),
            String::new(),
        ];
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use mesh_types::{Dimensions, ManifoldReport, MeshId};

    fn sample_info() -> ModelInfo {
        ModelInfo {
            mesh_id: MeshId::new(),
            vertex_count: 36_000,
            face_count: 12_000,
            bounding_box: Dimensions::new(10.0, 20.5, 0.25),
            volume: 1.0,
            surface_area: 6.0,
            file_name: "bracket.stl".to_string(),
            file_size_bytes: 600_084,
            manifold: ManifoldReport::default(),
        }
    }

    #[test]
    fn report_name_strips_extension() {
        assert_eq!(report_file_name("bracket.stl"), "bracket_report.txt");
        assert_eq!(report_file_name("BRACKET.STL"), "BRACKET.STL_report.txt");
        assert_eq!(report_file_name("a.stl.stl"), "a.stl_report.txt");
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn report_text_layout() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();
        let text = ModelReport::new(sample_info(), at).to_text();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "3D Model Analysis Report");
        assert_eq!(lines[4], "- Name: bracket.stl");
        assert_eq!(lines[5], "- Size: 0.57 MB");
        assert_eq!(lines[8], "- Vertices: 36,000");
        assert_eq!(lines[9], "- Faces: 12,000");
        assert_eq!(lines[12], "- Width (X): 10");
        assert_eq!(lines[13], "- Depth (Y): 20.5");
        assert_eq!(lines[14], "- Height (Z): 0.25");
        assert_eq!(lines[17], "- Volume: 1 cm³");
        assert_eq!(lines[18], "- Surface Area: 6 cm²");
        assert_eq!(lines[20], "Generated on: 2024-03-09 14:05:00 UTC");
        assert!(text.ends_with('\n'));
    }
}
