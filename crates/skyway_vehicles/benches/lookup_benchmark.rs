//! Benchmark for direction-space sprite lookup and definition building.
//!
//! Run with: cargo bench --package skyway_vehicles --bench lookup_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use skyway_shared::Vec3;
use skyway_vehicles::{
    lookup_sprite, BankingState, CompassDirection, DefinitionBuilder, Diagnostics,
    FallbackVolumeCache, ImageCatalog, VehicleDefinition,
};

const SECTIONS: [&str; 3] = ["flat", "ascending", "decending"];

fn definition_xml() -> String {
    let mut xml = String::from(r#"<vehicle id="bench" type="flying">"#);
    for section in SECTIONS {
        xml.push_str(&format!("<{section}>"));
        for dir in CompassDirection::ALL {
            xml.push_str(&format!("<{dir}>{section}_{dir}.png</{dir}>"));
        }
        xml.push_str(&format!("</{section}>"));
    }
    xml.push_str("</vehicle>");
    xml
}

fn catalog() -> ImageCatalog {
    ImageCatalog::with_names(SECTIONS.iter().flat_map(|section| {
        CompassDirection::ALL
            .iter()
            .map(move |dir| format!("{section}_{dir}.png"))
    }))
}

fn build_definition(xml: &str, images: &ImageCatalog, cache: &FallbackVolumeCache) -> VehicleDefinition {
    let doc = roxmltree::Document::parse(xml).unwrap();
    DefinitionBuilder::new(images, cache)
        .build(&doc.root_element(), &mut Diagnostics::new())
        .unwrap()
}

fn benchmark_lookup(c: &mut Criterion) {
    let images = catalog();
    let cache = FallbackVolumeCache::default();
    let def = build_definition(&definition_xml(), &images, &cache);

    let headings: Vec<Vec3> = (0..64)
        .map(|i| {
            let angle = i as f32 * std::f32::consts::TAU / 64.0;
            Vec3::new(angle.cos(), angle.sin(), 0.3).normalize_or_zero()
        })
        .collect();

    c.bench_function("lookup_sprite_ascending", |b| {
        let mut i = 0usize;
        b.iter(|| {
            i = (i + 1) % headings.len();
            black_box(lookup_sprite(&def, BankingState::Ascending, headings[i]))
        });
    });
}

fn benchmark_build(c: &mut Criterion) {
    let images = catalog();
    let cache = FallbackVolumeCache::default();
    let xml = definition_xml();
    // keep one alive so every iteration reuses the same stand-in volume
    let _anchor = build_definition(&xml, &images, &cache);

    c.bench_function("build_definition_48_sprites", |b| {
        b.iter(|| black_box(build_definition(&xml, &images, &cache)));
    });
}

criterion_group!(benches, benchmark_lookup, benchmark_build);
criterion_main!(benches);
