use dnacode_codec::Conversion;

pub fn list_modes() {
    println!("\n🧬 Available conversion modes:");
    println!("{}", "=".repeat(50));

    for mode in Conversion::all() {
        println!("  • {mode}: {}", mode.describe());
    }

    println!("\n💡 Use 'dnacode convert --mode <MODE> <DATA>'");
}
