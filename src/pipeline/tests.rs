#[cfg(test)]
mod tests {
    use crate::pipeline::{run, RunStatus};
    use crate::ts::Config;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn write_header(project: &Path, relative: &str, content: &str) {
        let path = project.join("src").join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn run_in(project: &Path) -> RunStatus {
        let config = Config::for_project_dir(project);
        run(&config).unwrap()
    }

    fn read_artifact(project: &Path) -> String {
        fs::read_to_string(project.join("interface/src/lib/types/enums.ts")).unwrap()
    }

    #[test]
    fn test_end_to_end_single_header() {
        let temp_dir = tempdir().unwrap();
        let project = temp_dir.path();
        write_header(
            project,
            "Sensor.h",
            r#"
                typedef enum sensor_state
                {
                    SST_READY = 0x01,  // ready for measurements
                    SST_BUSY = 2,
                    SST_MAX
                } sensor_state_t;
            "#,
        );

        let status = run_in(project);
        let summary = match status {
            RunStatus::Generated(summary) => summary,
            RunStatus::NoHeaders => panic!("expected an artifact"),
        };
        assert_eq!(summary.headers_scanned, 1);
        assert_eq!(summary.enums_generated, 1);
        assert_eq!(summary.mappings[0].source_name, "sensor_state");
        assert_eq!(summary.mappings[0].ts_name, "SensorState");

        let artifact = read_artifact(project);
        assert!(artifact.starts_with("// Auto-generated TypeScript enums from C++ headers\n"));
        assert!(artifact.contains("// From Sensor.h\n"));
        assert!(artifact.contains(
            "export enum SensorState {\n\
             \x20 /** ready for measurements */\n\
             \x20 Ready = 0x01,\n\
             \x20 Busy = 2,\n\
             }\n"
        ));
        // The boundary sentinel never reaches the artifact.
        assert!(!artifact.contains("Max"));
        assert!(!artifact.contains("SST_MAX"));
    }

    #[test]
    fn test_run_is_idempotent() {
        let temp_dir = tempdir().unwrap();
        let project = temp_dir.path();
        write_header(
            project,
            "Gateway.h",
            r#"
                typedef enum genius_mode { GM_OFF = 0, GM_ON } genius_mode_t;
            "#,
        );

        run_in(project);
        let first = read_artifact(project);
        run_in(project);
        let second = read_artifact(project);

        assert_eq!(first, second);
    }

    #[test]
    fn test_no_headers_writes_nothing() {
        let temp_dir = tempdir().unwrap();
        let project = temp_dir.path();
        fs::create_dir_all(project.join("src")).unwrap();

        let status = run_in(project);
        assert!(matches!(status, RunStatus::NoHeaders));
        assert!(!project.join("interface/src/lib/types/enums.ts").exists());
    }

    #[test]
    fn test_headers_without_enums_still_write_banner() {
        let temp_dir = tempdir().unwrap();
        let project = temp_dir.path();
        write_header(project, "Utils.h", "typedef struct point { int x; } point_t;");

        let status = run_in(project);
        let summary = match status {
            RunStatus::Generated(summary) => summary,
            RunStatus::NoHeaders => panic!("expected a banner-only artifact"),
        };
        assert_eq!(summary.enums_generated, 0);

        let artifact = read_artifact(project);
        assert!(artifact.starts_with("// Auto-generated TypeScript enums from C++ headers\n"));
        assert!(!artifact.contains("export enum"));
    }

    #[test]
    fn test_vendored_lib_paths_are_skipped() {
        let temp_dir = tempdir().unwrap();
        let project = temp_dir.path();
        write_header(
            project,
            "Own.h",
            "typedef enum own { OW_A = 1 } own_t;",
        );
        write_header(
            project,
            "lib/Vendored.h",
            "typedef enum vendored { VD_A = 1 } vendored_t;",
        );

        let status = run_in(project);
        let summary = match status {
            RunStatus::Generated(summary) => summary,
            RunStatus::NoHeaders => panic!("expected an artifact"),
        };
        assert_eq!(summary.headers_scanned, 1);

        let artifact = read_artifact(project);
        assert!(artifact.contains("export enum Own"));
        assert!(!artifact.contains("Vendored"));
    }

    #[test]
    fn test_unreadable_file_is_skipped_not_fatal() {
        let temp_dir = tempdir().unwrap();
        let project = temp_dir.path();
        // Not valid UTF-8, so reading it as text fails.
        fs::create_dir_all(project.join("src")).unwrap();
        fs::write(project.join("src/Bad.h"), [0xff, 0xfe, 0x00, 0xd8]).unwrap();
        write_header(project, "Good.h", "typedef enum good { GD_A = 1 } good_t;");

        let summary = match run_in(project) {
            RunStatus::Generated(summary) => summary,
            RunStatus::NoHeaders => panic!("one bad header must not abort the batch"),
        };
        assert_eq!(summary.headers_scanned, 2);
        assert_eq!(summary.enums_generated, 1);

        let artifact = read_artifact(project);
        assert!(artifact.contains("export enum Good"));
        assert!(!artifact.contains("Bad.h"));
    }

    #[test]
    fn test_files_processed_in_sorted_order() {
        let temp_dir = tempdir().unwrap();
        let project = temp_dir.path();
        write_header(project, "Zulu.h", "typedef enum zz { ZZ_A = 1 } zz_t;");
        write_header(project, "Alpha.h", "typedef enum aa { AA_A = 1 } aa_t;");

        let artifact = match run_in(project) {
            RunStatus::Generated(_) => read_artifact(project),
            RunStatus::NoHeaders => panic!("expected an artifact"),
        };

        let alpha = artifact.find("// From Alpha.h").unwrap();
        let zulu = artifact.find("// From Zulu.h").unwrap();
        assert!(alpha < zulu);
    }

    #[test]
    fn test_multiple_enums_in_one_file_keep_discovery_order() {
        let temp_dir = tempdir().unwrap();
        let project = temp_dir.path();
        write_header(
            project,
            "Devices.h",
            r#"
                typedef enum genius_smoke_detector
                {
                    GSD_UNKNOWN = -1, // Unknown smoke detector type
                    GSD_GENIUS_PLUS_X = 0
                } GeniusSmokeDetector;

                typedef enum genius_radio_module
                {
                    GRM_UNKNOWN = -1,
                    GRM_FM_BASIS_X = 0
                } GeniusRadioModule;
            "#,
        );

        let summary = match run_in(project) {
            RunStatus::Generated(summary) => summary,
            RunStatus::NoHeaders => panic!("expected an artifact"),
        };
        assert_eq!(summary.enums_generated, 2);
        assert_eq!(summary.mappings[0].ts_name, "GeniusSmokeDetector");
        assert_eq!(summary.mappings[1].ts_name, "GeniusRadioModule");

        let artifact = read_artifact(project);
        let detector = artifact.find("export enum GeniusSmokeDetector").unwrap();
        let radio = artifact.find("export enum GeniusRadioModule").unwrap();
        assert!(detector < radio);
    }

    #[test]
    fn test_subdirectories_are_scanned() {
        let temp_dir = tempdir().unwrap();
        let project = temp_dir.path();
        write_header(
            project,
            "nested/Deep.h",
            "typedef enum deep { DP_A = 1 } deep_t;",
        );

        let summary = match run_in(project) {
            RunStatus::Generated(summary) => summary,
            RunStatus::NoHeaders => panic!("expected an artifact"),
        };
        assert_eq!(summary.headers_scanned, 1);
        assert!(read_artifact(project).contains("// From nested/Deep.h"));
    }

    #[test]
    fn test_non_header_files_are_ignored() {
        let temp_dir = tempdir().unwrap();
        let project = temp_dir.path();
        write_header(project, "main.cpp", "typedef enum cpp { CP_A = 1 } cpp_t;");
        fs::create_dir_all(project.join("src")).unwrap();

        let status = run_in(project);
        assert!(matches!(status, RunStatus::NoHeaders));
    }
}
