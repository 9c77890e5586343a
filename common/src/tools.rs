//! # External Tool Catalogue
//!
//! SpiderScan owns none of the scanning logic. It drives three third-party
//! projects, described here by where they come from and how they are invoked.

use std::path::Path;

/// A tool that is fetched as a git repository.
#[derive(Clone, Copy, Debug)]
pub struct RepoTool {
    pub name: &'static str,
    pub repo_url: &'static str,
    /// Directory the repository is cloned into, relative to the work directory.
    pub clone_dir: &'static str,
}

/// A tool expected on `PATH`, installed on demand.
#[derive(Clone, Copy, Debug)]
pub struct BinaryTool {
    pub name: &'static str,
    pub check_cmd: &'static str,
    pub install_cmd: &'static str,
}

pub const PARAMSPIDER: RepoTool = RepoTool {
    name: "ParamSpider",
    repo_url: "https://github.com/0xKayala/ParamSpider.git",
    clone_dir: "ParamSpider",
};

pub const PARAMSPIDER_REQUIREMENTS_CMD: &str = "pip install -r ParamSpider/requirements.txt";

pub const FUZZING_TEMPLATES: RepoTool = RepoTool {
    name: "Fuzzing templates",
    repo_url: "https://github.com/MuhammadWaseem29/Fuzzingtemplates-.git",
    clone_dir: "Fuzzingtemplates-/",
};

pub const NUCLEI: BinaryTool = BinaryTool {
    name: "nuclei",
    check_cmd: "nuclei -version",
    install_cmd: "go install -v github.com/projectdiscovery/nuclei/v2/cmd/nuclei@latest",
};

/// Scratch file ParamSpider writes to before its lines are moved into `urls.txt`.
pub const DISCOVERY_TEMP_FILE: &str = "temp_urls.txt";

pub fn clone_cmd(repo_url: &str, dir: &Path) -> String {
    format!("git clone {} {}", repo_url, dir.display())
}

pub fn paramspider_cmd(domain: &str, out_file: &Path) -> String {
    format!(
        "python {}/paramspider.py -d {} -o {}",
        PARAMSPIDER.clone_dir,
        domain,
        out_file.display()
    )
}

pub fn nuclei_cmd(url_file: &Path, template_dir: &Path) -> String {
    format!(
        "nuclei -l {} -t {}",
        url_file.display(),
        template_dir.display()
    )
}
