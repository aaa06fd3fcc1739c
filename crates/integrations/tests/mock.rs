mod common;

use beanscope_api::{ClassKind, FieldInfo, TestConfiguration, TypeRef};
use beanscope_integrations::mock::{EASYMOCK_MOCK, MOCKITO_MOCK};
use common::{Universe, bean, discovered, extension_names, inject, library_type};

fn mock_field(name: &str, ty: &str) -> FieldInfo {
    FieldInfo::new(name, TypeRef::class(ty.to_string())).with_marker(MOCKITO_MOCK)
}

fn service_universe() -> Universe {
    Universe::new().with([
        bean("com.example.Service")
            .kind(ClassKind::Interface)
            .build(),
        bean("com.example.ServiceImpl")
            .implements("com.example.Service")
            .build(),
        bean("com.example.Consumer")
            .field(inject("service", "com.example.ServiceImpl"))
            .build(),
    ])
}

#[test]
fn test_mocked_interface_and_its_implementation_stay_out() {
    let universe = service_universe().with([
        library_type("org.mockito.Mock"),
        bean("com.example.ServiceTest")
            .field(mock_field("mock", "com.example.Service"))
            .field(inject("service", "com.example.Service"))
            .build(),
    ]);

    let report = universe
        .discover(&TestConfiguration::new("com.example.ServiceTest"))
        .unwrap();

    assert_eq!(discovered(&report), vec!["com.example.ServiceTest"]);
    assert!(!report.descriptor.is_discovered("com.example.Service"));
    assert!(!report.descriptor.is_discovered("com.example.ServiceImpl"));
    assert!(extension_names(&report).contains(&"io.github.beanscope.mockito.MockitoExtension"));
}

#[test]
fn test_direct_implementation_injection_survives_interface_mock() {
    let universe = service_universe().with([
        library_type("org.mockito.Mock"),
        bean("com.example.ServiceTest")
            .field(mock_field("mock", "com.example.Service"))
            .field(inject("service", "com.example.Service"))
            .field(inject("consumer", "com.example.Consumer"))
            .build(),
    ]);

    let report = universe
        .discover(&TestConfiguration::new("com.example.ServiceTest"))
        .unwrap();

    assert_eq!(
        discovered(&report),
        vec!["com.example.ServiceTest", "com.example.Consumer", "com.example.ServiceImpl"]
    );
    assert!(extension_names(&report).contains(&"io.github.beanscope.mockito.MockitoExtension"));
}

#[test]
fn test_mock_fields_on_other_candidates_are_ignored() {
    let universe = service_universe().with([
        library_type("org.mockito.Mock"),
        bean("com.example.ServiceTest")
            .field(inject("holder", "com.example.Holder"))
            .field(inject("consumer", "com.example.Consumer"))
            .build(),
        bean("com.example.Holder")
            .field(mock_field("impl", "com.example.ServiceImpl"))
            .build(),
    ]);

    let report = universe
        .discover(&TestConfiguration::new("com.example.ServiceTest"))
        .unwrap();

    assert_eq!(
        discovered(&report),
        vec!["com.example.ServiceTest", "com.example.Holder", "com.example.Consumer"]
    );
}

#[test]
fn test_absent_library_disables_mock_support() {
    let universe = service_universe().with([bean("com.example.ServiceTest")
        .field(mock_field("impl", "com.example.ServiceImpl"))
        .field(inject("impl2", "com.example.ServiceImpl"))
        .build()]);

    let report = universe
        .discover(&TestConfiguration::new("com.example.ServiceTest"))
        .unwrap();

    assert_eq!(
        discovered(&report),
        vec!["com.example.ServiceTest", "com.example.ServiceImpl"]
    );
    assert!(
        !extension_names(&report)
            .iter()
            .any(|name| name.contains("Mock"))
    );
}

#[test]
fn test_easymock_only_honours_its_own_marker() {
    let universe = service_universe().with([
        library_type("org.easymock.EasyMockRunner"),
        bean("com.example.ServiceTest")
            .field(
                FieldInfo::new("impl", TypeRef::class("com.example.ServiceImpl"))
                    .with_marker(EASYMOCK_MOCK),
            )
            .field(mock_field("consumer", "com.example.Consumer"))
            .field(inject("a", "com.example.ServiceImpl"))
            .field(inject("b", "com.example.Consumer"))
            .build(),
    ]);

    let report = universe
        .discover(&TestConfiguration::new("com.example.ServiceTest"))
        .unwrap();

    assert_eq!(
        discovered(&report),
        vec!["com.example.ServiceTest", "com.example.Consumer"]
    );
    assert_eq!(
        extension_names(&report)
            .into_iter()
            .filter(|name| name.contains("Mock"))
            .collect::<Vec<_>>(),
        vec!["io.github.beanscope.easymock.EasyMockExtension"]
    );
}
