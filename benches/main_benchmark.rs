use criterion::{Criterion, criterion_group, criterion_main};
use gcx::build::{BuildSpec, compose_args};
use gcx::config::GcxConfig;
use gcx::registry::Registry;
use gcx::target::{Arch, Os, Target};
use std::hint::black_box;

const MOCK_CONFIG: &str = r#"
[toolchain]
command = ["zig", "cc"]

[build]
flags = ["-DGC_THREADS", "-DPARALLEL_MARK", "-fPIC", "-O2"]
include_dirs = ["./bdwgc/include", "./bdwgc/libatomic_ops/src"]

[[recipes]]
name = "build-linux-arm64"
arch = "aarch64"
os = "linux"
"#;

fn bdwgc_like_spec() -> BuildSpec {
    let config = GcxConfig::default();
    // Roughly the size of the real bdwgc tree
    let sources = (0..60).map(|i| format!("./bdwgc/file{:02}.c", i)).collect();
    BuildSpec::new(
        config.toolchain.command,
        config.build.flags,
        config.build.include_dirs,
        sources,
    )
}

fn bench_compose(c: &mut Criterion) {
    let spec = bdwgc_like_spec();

    c.bench_function("compose_args_linux_x64", |b| {
        b.iter(|| compose_args(black_box(&spec), black_box(Target::new(Arch::X86_64, Os::Linux))))
    });

    c.bench_function("compose_args_all_targets", |b| {
        b.iter(|| {
            for target in Target::all() {
                let _ = compose_args(black_box(&spec), black_box(target));
            }
        })
    });
}

fn bench_config_parse(c: &mut Criterion) {
    c.bench_function("parse_gcx_toml", |b| {
        b.iter(|| {
            let _: GcxConfig = toml::from_str(black_box(MOCK_CONFIG)).unwrap();
        })
    });
}

fn bench_registry(c: &mut Criterion) {
    let config: GcxConfig = toml::from_str(MOCK_CONFIG).unwrap();

    c.bench_function("registry_with_extra", |b| {
        b.iter(|| Registry::with_extra(black_box(&config.recipes)).unwrap())
    });

    let registry = Registry::with_extra(&config.recipes).unwrap();
    c.bench_function("registry_resolve", |b| {
        b.iter(|| {
            let _ = registry.resolve(black_box(&["build-linux-x64", "build-linux-arm64"]));
        })
    });
}

criterion_group!(benches, bench_compose, bench_config_parse, bench_registry);
criterion_main!(benches);
