use std::thread;

use domain_resource::{
    model::{
        entity::{instance::Limits, Instance, InstanceState, StagingTask},
        vo::{ResourceCapacity, ResourceUsage},
    },
    repository::SharedRegistries,
    service::ResourceManagerService,
};
use service_resource::ResourceManagerServiceImpl;

const ROUNDS: usize = 2_000;

#[test]
fn queries_never_see_half_applied_writes() {
    let registries = SharedRegistries::new();
    let service = ResourceManagerServiceImpl::builder()
        .registries(registries.clone())
        .capacity(ResourceCapacity::new(600, 4.0, 4000, 2.0).unwrap())
        .build();
    let idle = ResourceUsage::default();
    let busy = ResourceUsage {
        consumed_memory: 512 + 1024,
        consumed_disk: 1024 + 2048,
    };

    thread::scope(|scope| {
        scope.spawn(|| {
            for _ in 0..ROUNDS {
                let instance = Instance::builder()
                    .application_id("app")
                    .limits(Limits { memory: 512, disk: 1024 })
                    .state(InstanceState::Running)
                    .build();
                let instance_id = instance.id();
                let task = StagingTask::new();
                let task_id = task.id();
                {
                    let mut guard = registries.write();
                    guard.instances.register(instance);
                    guard.staging_tasks.register(task);
                }
                {
                    let mut guard = registries.write();
                    guard.instances.unregister(&instance_id);
                    guard.staging_tasks.unregister(&task_id);
                }
            }
        });

        scope.spawn(|| {
            for _ in 0..ROUNDS {
                let usage = service.usage();
                assert!(usage == idle || usage == busy, "torn snapshot: {usage:?}");

                let could = service.could_reserve(2400 - 1536 - 1, 8000 - 3072 - 1);
                assert!(could, "admission must hold in both snapshots");
            }
        });
    });

    assert_eq!(service.remaining_memory(), 2400);
    assert_eq!(service.remaining_disk(), 8000);
}
