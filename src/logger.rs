#[ctor::ctor]
fn init() {
    use log4rs;
    // library consumers without a log4rs.yaml still get a working crate
    let _ = log4rs::init_file("log4rs.yaml", Default::default());
}
