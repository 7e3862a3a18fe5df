//! # Parallel Cache Warming and Invalidation
//!
//! **What this example teaches:**
//! - Pre-reflecting a whole domain in one parallel [`ReflectionCache::warm`] call
//! - Sharing a cache across threads behind an [`Arc`]
//! - Invalidating a single type and watching it re-reflect
//!
//! **When to use this pattern:**
//! - Startup warmup of long-running services
//! - Refreshing cached facts after a described type changes
//!
//! **Prerequisites:**
//! - Familiarity with the basic queries from the `inspect` example

use std::sync::Arc;
use std::thread;
use std::time::Instant;
use typescope::prelude::*;

const DOMAIN_SIZE: usize = 64;

fn main() -> Result<()> {
    let registry = build_domain(DOMAIN_SIZE)?;
    let cache = Arc::new(ReflectionCache::new(registry));

    println!("🔥 Warming a {DOMAIN_SIZE}-type domain");

    // === Parallel Warmup ===
    let names: Vec<String> = (0..DOMAIN_SIZE).map(type_name).collect();
    let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();

    let started = Instant::now();
    cache.warm(&name_refs)?;
    println!("  Reflected {} types in {:?}", cache.len(), started.elapsed());

    // === Concurrent Queries ===
    query_from_threads(&cache);

    // === Invalidation ===
    let victim = type_name(0);
    println!("\n♻️  Invalidating {victim}");
    cache.invalidate(&victim);
    println!("  Reflected types now: {}", cache.len());

    cache.get_property_names(&victim)?;
    println!(
        "  Re-reflected on next query: {}",
        cache.is_type_reflected(&victim)
    );

    println!("\n✅ Warmup run completed!");

    Ok(())
}

fn type_name(index: usize) -> String {
    format!("Domain\\Model\\Entity{index}")
}

/// A generated domain where every type carries the same shape of members.
fn build_domain(count: usize) -> Result<Arc<DescriptionRegistry>> {
    let registry = DescriptionRegistry::new();

    for index in 0..count {
        registry.register(
            TypeDescriptionBuilder::new(type_name(index))
                .tag("entity", "")
                .property("uid", |p| p.tag("var", "int"))
                .property("label", |p| p.tag("var", "string"))
                .method("setLabel", |m| {
                    m.tag("param", "string $label the display label")
                        .parameter("label", |p| p)
                })
                .build()?,
        )?;
    }

    Ok(Arc::new(registry))
}

fn query_from_threads(cache: &Arc<ReflectionCache>) {
    println!("\n🧵 Querying from 4 threads:");

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let cache = cache.clone();
            thread::spawn(move || {
                let mut properties = 0;
                for index in 0..DOMAIN_SIZE {
                    let names = cache.get_property_names(&type_name(index)).unwrap();
                    properties += names.count();
                }
                (worker, properties)
            })
        })
        .collect();

    for handle in handles {
        let (worker, properties) = handle.join().unwrap();
        println!("  worker {worker} touched {properties} properties");
    }
}
