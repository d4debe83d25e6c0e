// SPDX-License-Identifier: Apache-2.0 OR MIT
//! Concurrency tests for loggers and the registry.
//!
//! Each test races several threads through a `Barrier` so the contended
//! operations actually overlap, then checks the invariant afterwards.

use clerk::{Flags, Logger, LoggingError, MemorySink, Registry, Severity};
use std::sync::{Arc, Barrier};
use std::thread;

const THREADS: usize = 8;

fn memory_logger(title: &str, level: Severity) -> (Logger, MemorySink) {
    let out = MemorySink::new();
    let logger = Logger::new(out.clone().into(), title, Flags::empty(), level, "--");
    (logger, out)
}

#[test]
fn test_concurrent_registration_has_one_winner() {
    for _ in 0..20 {
        let registry = Registry::new();
        let barrier = Barrier::new(THREADS);
        let (registry_ref, barrier_ref) = (&registry, &barrier);

        let results: Vec<Result<_, LoggingError>> = thread::scope(|s| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    s.spawn(move || {
                        let (logger, _) = memory_logger("contended", Severity::Info);
                        barrier_ref.wait();
                        registry_ref.register(logger)
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let wins = results.iter().filter(|r| r.is_ok()).count();
        let duplicates = results
            .iter()
            .filter(|r| matches!(r, Err(LoggingError::DuplicateName { .. })))
            .count();
        assert_eq!(wins, 1);
        assert_eq!(duplicates, THREADS - 1);
        assert_eq!(registry.len(), 1);
    }
}

#[test]
fn test_levels_are_never_torn() {
    let registry = Registry::new();
    let loggers: Vec<Arc<Logger>> = (0..4)
        .map(|i| {
            let (logger, _) = memory_logger(&format!("l{}", i), Severity::Warning);
            registry.register(logger).unwrap()
        })
        .collect();
    let barrier = Barrier::new(THREADS);

    thread::scope(|s| {
        for t in 0..THREADS {
            let registry = &registry;
            let loggers = &loggers;
            let barrier = &barrier;
            s.spawn(move || {
                barrier.wait();
                for i in 0..500 {
                    let level = Severity::ALL[(t + i) % Severity::ALL.len()];
                    if t % 2 == 0 {
                        registry.set_level_for_all(level);
                    } else {
                        loggers[i % loggers.len()].set_level(level);
                    }
                    let seen = loggers[(t + i) % loggers.len()].level();
                    assert!(Severity::ALL.contains(&seen));
                }
            });
        }
    });

    registry.reset_all();
    for logger in &loggers {
        assert_eq!(logger.level(), Severity::Warning);
    }
}

#[test]
fn test_lines_use_one_consistent_snapshot() {
    let (logger, out) = memory_logger("snap", Severity::Debug);
    let logger = Arc::new(logger);
    let barrier = Barrier::new(THREADS + 1);

    thread::scope(|s| {
        for t in 0..THREADS {
            let logger = Arc::clone(&logger);
            let barrier = &barrier;
            s.spawn(move || {
                barrier.wait();
                for i in 0..200 {
                    logger.info(&format!("t{} m{}", t, i));
                }
            });
        }

        let barrier = &barrier;
        let logger = Arc::clone(&logger);
        s.spawn(move || {
            barrier.wait();
            for i in 0..200 {
                if i % 2 == 0 {
                    logger.set_separator("|");
                } else {
                    logger.set_separator("--");
                }
            }
        });
    });

    let contents = out.contents();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), THREADS * 200);
    for line in lines {
        let dashes = line.starts_with("(snap) -- [INFO] -- t");
        let pipes = line.starts_with("(snap) | [INFO] | t");
        assert!(dashes || pipes, "torn or interleaved line: {:?}", line);
    }
}

#[test]
fn test_registry_admin_while_logging() {
    let registry = Registry::new();
    let (logger, out) = memory_logger("busy", Severity::Error);
    let logger = registry.register(logger).unwrap();
    let barrier = Barrier::new(3);

    thread::scope(|s| {
        s.spawn(|| {
            barrier.wait();
            for _ in 0..300 {
                logger.error("e");
                logger.debug("d");
            }
        });
        s.spawn(|| {
            barrier.wait();
            for i in 0..300 {
                let name = if i % 2 == 0 { "debug" } else { "error" };
                registry.set_level_for("busy", name).unwrap();
            }
        });
        s.spawn(|| {
            barrier.wait();
            for _ in 0..300 {
                registry.reset_all();
                let _ = registry.lookup("busy").unwrap();
            }
        });
    });

    // Every error line is written; debug lines only when the level allowed it
    let contents = out.contents();
    let errors = contents.lines().filter(|l| l.ends_with("[ERROR] -- e")).count();
    assert_eq!(errors, 300);
    assert!(contents
        .lines()
        .all(|l| l == "(busy) -- [ERROR] -- e" || l == "(busy) -- [DEBUG] -- d"));
}
