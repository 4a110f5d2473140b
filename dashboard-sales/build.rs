use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Copy sales_data.csv to OUT_DIR for include_str
    let src = Path::new("../fixtures/sales_data.csv");
    if src.exists() {
        fs::copy(src, Path::new(&out_dir).join("sales_data.csv")).unwrap();
    } else {
        fs::write(
            Path::new(&out_dir).join("sales_data.csv"),
            "Date,Region,Color,Units,Sales\n2021-01-01,East,Red,10,$5.00\n2021-01-02,West,Blue,20,$7.50\n",
        )
        .unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/sales_data.csv");
}
