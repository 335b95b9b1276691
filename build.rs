use shadow_rs::ShadowBuilder;

fn main() {
    // Build metadata behind `qrcode-api --version`
    ShadowBuilder::builder()
        .build()
        .expect("Failed to generate build metadata");
}
