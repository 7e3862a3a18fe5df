//! # Cached Type Introspection Walkthrough
//!
//! **What this example teaches:**
//! - Describing application types with the fluent builder
//! - Querying property names and documentation tags through the cache
//! - How declared parameter classes and documented types merge
//! - The reverse index from class-level tags to type names
//!
//! **When to use this pattern:**
//! - Wiring a domain model into tag-driven frameworks
//! - Checking what the cache actually records for a type
//!
//! **Prerequisites:**
//! - None, the whole domain is described in code below

use std::sync::Arc;
use typescope::prelude::*;

fn main() -> Result<()> {
    let cache = ReflectionCache::new(build_domain()?);

    println!("🔍 Inspecting the blog domain through the cache");

    // === Property-Level Queries ===
    print_properties(&cache)?;

    // === Method-Level Queries ===
    print_method_facts(&cache)?;

    // === Tag Queries ===
    print_tag_queries(&cache)?;

    // === Cache State ===
    print_cache_state(&cache);

    println!("\n✅ Introspection walkthrough completed!");

    Ok(())
}

/// Three described types with one inheritance edge.
fn build_domain() -> Result<Arc<DescriptionRegistry>> {
    let registry = DescriptionRegistry::new();

    registry.register(
        TypeDescriptionBuilder::new("AbstractEntity")
            .property("uid", |p| p.tag("var", "int"))
            .method("getUid", |m| m.tag("return", "int"))
            .build()?,
    )?;

    registry.register(
        TypeDescriptionBuilder::new("BlogPost")
            .extends("AbstractEntity")
            .tag("entity", "")
            .tag("author", "Jane Doe")
            .property("title", |p| p.tag("var", "string").tag("validate", "NotEmpty"))
            .property("comments", |p| p.tag("var", "Comment[]").tag("lazy", ""))
            .method("setTitle", |m| {
                m.tag("param", "string $title the new title")
                    .parameter("title", |p| p)
            })
            .method("reassign", |m| {
                m.tag("param", "\\Blog\\Author $author the new owner")
                    .tag("param", "bool $notify whether to mail the author")
                    .parameter("author", |p| p.class_name("\\Blog\\Author"))
                    .parameter("notify", |p| p.default_value(DefaultValue::Bool(true)))
            })
            .build()?,
    )?;

    registry.register(
        TypeDescriptionBuilder::new("Comment")
            .tag("entity", "")
            .property("text", |p| p.tag("var", "string"))
            .build()?,
    )?;

    Ok(Arc::new(registry))
}

fn print_properties(cache: &ReflectionCache) -> Result<()> {
    println!("\n📋 Properties of BlogPost (own first, inherited appended):");

    for (_, name) in cache.get_property_names("BlogPost")?.iter() {
        let tags = cache.get_property_tags_values("BlogPost", name)?;
        if tags.is_empty() {
            println!("  {name}");
        } else {
            let tag_names: Vec<&str> = tags.tag_names().collect();
            println!("  {name} [{}]", tag_names.join(", "));
        }
    }

    Ok(())
}

fn print_method_facts(cache: &ReflectionCache) -> Result<()> {
    println!("\n🔧 Parameters of BlogPost::reassign:");

    let parameters = cache.get_method_parameters("BlogPost", "reassign")?;
    for descriptor in parameters.iter() {
        let resolved = descriptor.type_name.as_deref().unwrap_or("<unresolved>");
        let source = if descriptor.class_name.is_some() {
            "declared"
        } else if descriptor.inferred_type.is_some() {
            "documented"
        } else {
            "unknown"
        };

        println!(
            "  #{} {} : {} ({})",
            descriptor.position, descriptor.name, resolved, source
        );
        if let Some(default) = &descriptor.default {
            println!("     optional, defaults to {default}");
        }
    }

    println!("\n🏷️  Tags of BlogPost::setTitle:");
    let tags = cache.get_method_tags_values("BlogPost", "setTitle")?;
    for (tag, values) in tags.iter() {
        println!("  @{tag}: {}", values.join(" | "));
    }

    Ok(())
}

fn print_tag_queries(cache: &ReflectionCache) -> Result<()> {
    println!("\n🏷️  Class-level tags of BlogPost:");

    let class_tags = cache.get_class_tags_values("BlogPost")?;
    for (tag, values) in class_tags.iter() {
        if values.iter().all(String::is_empty) {
            println!("  @{tag}");
        } else {
            println!("  @{tag}: {}", values.join(" | "));
        }
    }
    println!("  (housekeeping tags like @author are filtered out)");

    // Reflect the remaining entity so the reverse index is complete.
    cache.get_class_tags_values("Comment")?;
    println!("\n🗂️  Types tagged @entity: {:?}", cache.get_type_names_by_tag("entity"));

    Ok(())
}

fn print_cache_state(cache: &ReflectionCache) {
    println!("\n📊 Cache state:");
    println!("  Reflected types: {:?}", cache.reflected_type_names());
    println!("  Entries: {}", cache.len());

    for name in cache.reflected_type_names() {
        if let Some(at) = cache.reflected_at(&name) {
            if let Ok(age) = at.elapsed() {
                println!("  {name} reflected {}µs ago", age.as_micros());
            }
        }
    }
}
