#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const BUCKET: &str = "fleet";
pub const FILLS: &str = "cargasCombustible.csv";
pub const DEDUCTIONS: &str = "stock_combustible_colectivos.csv";

pub const FILL_HEADER: &str = "idCarga,coche,fecha,hora,lugarCarga,contadorLitrosInicio,contadorLitrosCierre,litrosCargados,precio,numeroPrecintoViejo,numeroPrecintoNuevo,comentario,usuario";
pub const DEDUCTION_HEADER: &str = "idRestaLitros,coche,fecha,hora,litrosRestados,comentario,usuario";

pub fn fuellog() -> Command {
    cargo_bin_cmd!("fuellog")
}

/// Temp directory with a config file pointing at a local bucket and mirror.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self::with_operator(Some("Ana"))
    }

    pub fn with_operator(operator: Option<&str>) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let ws = Self { dir };

        fs::create_dir_all(ws.bucket_dir()).expect("create bucket dir");
        fs::create_dir_all(ws.mirror_dir()).expect("create mirror dir");

        let mut yaml = format!(
            "store:\n  kind: fs\n  bucket: {BUCKET}\n  root: '{}'\nmirror_dir: '{}'\n",
            ws.root().join("bucket").display(),
            ws.mirror_dir().display()
        );
        if let Some(name) = operator {
            yaml.push_str(&format!("operator: {name}\n"));
        }
        fs::write(ws.config(), yaml).expect("write config");

        ws
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn config(&self) -> PathBuf {
        self.root().join("fuellog.conf")
    }

    pub fn bucket_dir(&self) -> PathBuf {
        self.root().join("bucket").join(BUCKET)
    }

    pub fn mirror_dir(&self) -> PathBuf {
        self.root().join("mirror")
    }

    pub fn blob_path(&self, key: &str) -> PathBuf {
        self.bucket_dir().join(key)
    }

    pub fn read_blob(&self, key: &str) -> String {
        fs::read_to_string(self.blob_path(key)).expect("read blob")
    }

    pub fn seed_blob(&self, key: &str, content: &str) {
        fs::write(self.blob_path(key), content).expect("seed blob");
    }

    /// `fuellog --config <ws config> …`
    pub fn cmd(&self) -> Command {
        let mut cmd = fuellog();
        cmd.env_remove("FUELLOG_ACCESS_TOKEN");
        cmd.arg("--config").arg(self.config());
        cmd
    }
}
