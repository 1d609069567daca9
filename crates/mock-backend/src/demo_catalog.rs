//! Demo parts installed by the seed endpoint

use rigforge_common::{Part, PartCategory};
use serde_json::json;

/// Build the demo catalog
///
/// Two or three parts per category, with the attributes the compatibility
/// checks read: `socket`, `ram_type`, `form_factor`, `supports`, `power`
/// and `wattage`.
pub fn demo_parts() -> Vec<Part> {
    vec![
        Part::new("cpu-r5-7600", PartCategory::Cpu, "AMD Ryzen 5 7600", 199.0)
            .with_attribute("socket", "AM5")
            .with_attribute("cores", 6)
            .with_attribute("power", 65),
        Part::new("cpu-r7-7800x3d", PartCategory::Cpu, "AMD Ryzen 7 7800X3D", 389.0)
            .with_attribute("socket", "AM5")
            .with_attribute("cores", 8)
            .with_attribute("power", 120),
        Part::new("cpu-i5-13600k", PartCategory::Cpu, "Intel Core i5-13600K", 289.0)
            .with_attribute("socket", "LGA1700")
            .with_attribute("cores", 14)
            .with_attribute("power", 125),
        Part::new("mb-b650", PartCategory::Motherboard, "MSI B650 Tomahawk", 219.0)
            .with_attribute("socket", "AM5")
            .with_attribute("ram_type", "DDR5")
            .with_attribute("form_factor", "ATX")
            .with_attribute("power", 50),
        Part::new("mb-b760m", PartCategory::Motherboard, "ASUS Prime B760M-A", 139.0)
            .with_attribute("socket", "LGA1700")
            .with_attribute("ram_type", "DDR4")
            .with_attribute("form_factor", "mATX")
            .with_attribute("power", 40),
        Part::new("ram-ddr5-32", PartCategory::Ram, "Corsair Vengeance 32GB DDR5-6000", 109.0)
            .with_attribute("ram_type", "DDR5")
            .with_attribute("capacity_gb", 32)
            .with_attribute("power", 10),
        Part::new("ram-ddr4-16", PartCategory::Ram, "Kingston Fury 16GB DDR4-3200", 45.0)
            .with_attribute("ram_type", "DDR4")
            .with_attribute("capacity_gb", 16)
            .with_attribute("power", 6),
        Part::new("gpu-rtx4070", PartCategory::Gpu, "NVIDIA GeForce RTX 4070", 549.0)
            .with_attribute("vram_gb", 12)
            .with_attribute("power", 200),
        Part::new("gpu-rx7800xt", PartCategory::Gpu, "AMD Radeon RX 7800 XT", 499.0)
            .with_attribute("vram_gb", 16)
            .with_attribute("power", 263),
        Part::new("ssd-990pro-2tb", PartCategory::Storage, "Samsung 990 Pro 2TB", 169.0)
            .with_attribute("interface", "NVMe")
            .with_attribute("power", 7),
        Part::new("ssd-sn770-1tb", PartCategory::Storage, "WD Black SN770 1TB", 69.0)
            .with_attribute("interface", "NVMe")
            .with_attribute("power", 5),
        Part::new("psu-650", PartCategory::Psu, "Corsair RM650e", 89.0)
            .with_attribute("wattage", 650),
        Part::new("psu-850", PartCategory::Psu, "Seasonic Focus GX-850", 139.0)
            .with_attribute("wattage", 850),
        Part::new("case-4000d", PartCategory::Case, "Corsair 4000D Airflow", 104.0)
            .with_attribute("supports", json!(["ATX", "mATX", "ITX"])),
        Part::new("case-a4", PartCategory::Case, "Lian Li A4-H2O", 149.0)
            .with_attribute("supports", json!(["ITX"])),
    ]
}
