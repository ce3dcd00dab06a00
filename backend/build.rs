use std::fs;
use std::path::Path;

// Copies the trunk output into static/ for include_dir embedding. When the
// frontend has not been built yet, a stub index.html keeps the embed macro
// satisfied so the backend still compiles.
fn main() {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    let _ = fs::remove_dir_all(out_dir);
    fs::create_dir_all(out_dir.join("dist")).unwrap();

    if dist_dir.exists() {
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new()
                .overwrite(true)
                .copy_inside(true),
        )
        .unwrap();
    } else {
        fs::write(
            out_dir.join("dist").join("index.html"),
            "<!doctype html><title>frontend not built</title><p>Run <code>trunk build</code> in frontend/ first.</p>",
        )
        .unwrap();
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
