//! Compatibility filtering between CPU, mainboard and RAM
//!
//! The rules run along two hardware axes only: the CPU socket and the RAM
//! generation. Selection order is strict — CPU gates mainboards, and the
//! CPU + mainboard pair gates RAM. With no mainboard selected there are no
//! valid RAM options at all.

use crate::catalog::CatalogStore;
use buildsan_shared::{Category, ComponentRecord, ComponentSpec};

/// IDs of the mainboards whose socket list carries the CPU's socket
pub fn mainboards_for(catalog: &CatalogStore, cpu: &ComponentRecord) -> Vec<String> {
    let socket = match &cpu.spec {
        ComponentSpec::Cpu { socket, .. } => socket,
        _ => return Vec::new(),
    };
    catalog
        .iter(Category::Mainboard)
        .filter(|(_, mb)| match &mb.spec {
            ComponentSpec::Mainboard { sockets, .. } => sockets.iter().any(|s| s == socket),
            _ => false,
        })
        .map(|(id, _)| id.to_string())
        .collect()
}

/// IDs of the RAM modules supported by both the CPU and the mainboard.
/// Returns an empty list when no mainboard is selected.
pub fn ram_for(
    catalog: &CatalogStore,
    cpu: &ComponentRecord,
    mainboard: Option<&ComponentRecord>,
) -> Vec<String> {
    let ram_support = match &cpu.spec {
        ComponentSpec::Cpu { ram_support, .. } => ram_support,
        _ => return Vec::new(),
    };
    let board_memory = match mainboard.map(|mb| &mb.spec) {
        Some(ComponentSpec::Mainboard { memory_type, .. }) => *memory_type,
        _ => return Vec::new(),
    };
    catalog
        .iter(Category::Ram)
        .filter(|(_, ram)| match &ram.spec {
            ComponentSpec::Ram { memory_type, .. } => {
                *memory_type == board_memory && ram_support.contains(memory_type)
            }
            _ => false,
        })
        .map(|(id, _)| id.to_string())
        .collect()
}

/// True if the mainboard accepts the CPU's socket
pub fn mainboard_fits(cpu: &ComponentRecord, mainboard: &ComponentRecord) -> bool {
    match (&cpu.spec, &mainboard.spec) {
        (
            ComponentSpec::Cpu { socket, .. },
            ComponentSpec::Mainboard { sockets, .. },
        ) => sockets.iter().any(|s| s == socket),
        _ => false,
    }
}

/// True if the RAM module is accepted by both the CPU and the mainboard
pub fn ram_fits(
    cpu: &ComponentRecord,
    mainboard: &ComponentRecord,
    ram: &ComponentRecord,
) -> bool {
    let (ram_support, board_memory, memory_type) = match (&cpu.spec, &mainboard.spec, &ram.spec) {
        (
            ComponentSpec::Cpu { ram_support, .. },
            ComponentSpec::Mainboard { memory_type: board, .. },
            ComponentSpec::Ram { memory_type, .. },
        ) => (ram_support, board, memory_type),
        _ => return false,
    };
    memory_type == board_memory && ram_support.contains(memory_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogData, CatalogEntry};
    use buildsan_shared::MemoryType;

    fn entry(id: &str, name: &str, spec: ComponentSpec) -> CatalogEntry {
        CatalogEntry {
            id: id.to_string(),
            record: ComponentRecord::new(name, 1_000_000, 5.0, spec),
        }
    }

    fn fixture() -> CatalogStore {
        let data = CatalogData {
            components: vec![
                entry(
                    "cpu-12400f",
                    "Intel Core i5-12400F",
                    ComponentSpec::Cpu {
                        socket: "LGA1700".to_string(),
                        ram_support: vec![MemoryType::Ddr4, MemoryType::Ddr5],
                    },
                ),
                entry(
                    "mb-b660-ddr4",
                    "MSI PRO B660M-A DDR4",
                    ComponentSpec::Mainboard {
                        sockets: vec!["LGA1700".to_string()],
                        memory_type: MemoryType::Ddr4,
                    },
                ),
                entry(
                    "mb-b650-ddr5",
                    "Gigabyte B650M DS3H",
                    ComponentSpec::Mainboard {
                        sockets: vec!["AM5".to_string()],
                        memory_type: MemoryType::Ddr5,
                    },
                ),
                entry(
                    "ram-ddr4-16",
                    "Kingston Fury Beast 16GB DDR4",
                    ComponentSpec::Ram {
                        memory_type: MemoryType::Ddr4,
                        capacity_gb: 16,
                        speed_mhz: 3200,
                    },
                ),
                entry(
                    "ram-ddr5-32",
                    "Corsair Vengeance 32GB DDR5",
                    ComponentSpec::Ram {
                        memory_type: MemoryType::Ddr5,
                        capacity_gb: 32,
                        speed_mhz: 5600,
                    },
                ),
            ],
        };
        CatalogStore::from_data(data).unwrap()
    }

    #[test]
    fn test_mainboards_filtered_by_socket() {
        let catalog = fixture();
        let cpu = catalog.get(Category::Cpu, "cpu-12400f").unwrap();
        assert_eq!(mainboards_for(&catalog, cpu), vec!["mb-b660-ddr4"]);
    }

    #[test]
    fn test_ram_requires_mainboard() {
        let catalog = fixture();
        let cpu = catalog.get(Category::Cpu, "cpu-12400f").unwrap();
        assert!(ram_for(&catalog, cpu, None).is_empty());
    }

    #[test]
    fn test_ram_filtered_by_board_memory_type() {
        let catalog = fixture();
        let cpu = catalog.get(Category::Cpu, "cpu-12400f").unwrap();
        let board = catalog.get(Category::Mainboard, "mb-b660-ddr4").unwrap();
        // CPU supports DDR4 and DDR5, but the board is DDR4 only
        assert_eq!(ram_for(&catalog, cpu, Some(board)), vec!["ram-ddr4-16"]);
    }

    #[test]
    fn test_ram_must_be_in_cpu_support_list() {
        let catalog = fixture();
        let cpu_record = ComponentRecord::new(
            "Intel Core i7-10700K",
            5_000_000,
            6.0,
            ComponentSpec::Cpu {
                socket: "LGA1700".to_string(),
                ram_support: vec![MemoryType::Ddr3],
            },
        );
        let board = catalog.get(Category::Mainboard, "mb-b660-ddr4").unwrap();
        // Board memory type matches nothing the CPU supports
        assert!(ram_for(&catalog, &cpu_record, Some(board)).is_empty());
    }

    #[test]
    fn test_pairwise_checks() {
        let catalog = fixture();
        let cpu = catalog.get(Category::Cpu, "cpu-12400f").unwrap();
        let good = catalog.get(Category::Mainboard, "mb-b660-ddr4").unwrap();
        let bad = catalog.get(Category::Mainboard, "mb-b650-ddr5").unwrap();
        assert!(mainboard_fits(cpu, good));
        assert!(!mainboard_fits(cpu, bad));

        let ram = catalog.get(Category::Ram, "ram-ddr4-16").unwrap();
        assert!(ram_fits(cpu, good, ram));
        let ddr5 = catalog.get(Category::Ram, "ram-ddr5-32").unwrap();
        assert!(!ram_fits(cpu, good, ddr5));
    }
}
