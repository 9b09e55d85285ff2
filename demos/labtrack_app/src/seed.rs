// labtrack_app/src/seed.rs

//! Demo seed data: the order book and account list the walkthrough starts
//! from. Everything here is plain sample content; nothing is consulted by the
//! domain logic.

use chrono::{DateTime, TimeZone, Utc};
use labtrack::{
  Carrier, ContactInfo, Order, OrderPriority, OrderStatus, Permission, ProductionPhoto,
  ProstheticType, StatusUpdate, User, UserRole,
};
use uuid::Uuid;

fn day(year: i32, month: u32, dom: u32) -> DateTime<Utc> {
  Utc
    .with_ymd_and_hms(year, month, dom, 9, 0, 0)
    .single()
    .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

fn history_entry(status: OrderStatus, at: DateTime<Utc>, notes: &str) -> StatusUpdate {
  StatusUpdate {
    status,
    timestamp: at,
    notes: Some(notes.to_string()),
    updated_by: None,
  }
}

struct SeedOrder {
  order_number: &'static str,
  patient_name: &'static str,
  prosthetic_type: ProstheticType,
  special_instructions: &'static str,
  clinic_name: &'static str,
  assigned_lab: Option<&'static str>,
  priority: OrderPriority,
  due_date: DateTime<Utc>,
  estimated_completion_time: Option<DateTime<Utc>>,
  tracking: Option<(&'static str, Carrier)>,
  history: Vec<StatusUpdate>,
  photos: Vec<(OrderStatus, &'static str, &'static str, DateTime<Utc>)>,
}

fn build(seed: SeedOrder) -> Order {
  // History is already in progression order; the record's lifecycle fields
  // derive from it.
  let created_at = seed.history[0].timestamp;
  let last_entry = seed.history[seed.history.len() - 1].clone();
  let (tracking_number, carrier) = match seed.tracking {
    Some((number, carrier)) => (Some(number.to_string()), Some(carrier)),
    None => (None, None),
  };

  Order {
    id: Uuid::new_v4(),
    order_number: seed.order_number.to_string(),
    patient_name: seed.patient_name.to_string(),
    prosthetic_type: seed.prosthetic_type,
    special_instructions: seed.special_instructions.to_string(),
    status: last_entry.status,
    clinic_name: seed.clinic_name.to_string(),
    assigned_lab: seed.assigned_lab.map(str::to_string),
    created_at,
    updated_at: last_entry.timestamp,
    due_date: seed.due_date,
    tracking_number,
    carrier,
    priority: seed.priority,
    estimated_completion_time: seed.estimated_completion_time,
    production_photos: seed
      .photos
      .into_iter()
      .map(|(stage, url, caption, uploaded_at)| ProductionPhoto {
        id: Uuid::new_v4(),
        stage,
        url: url.to_string(),
        caption: Some(caption.to_string()),
        uploaded_at,
      })
      .collect(),
    status_history: seed.history,
    lab_notes: None,
    admin_notes: None,
    last_modified_by: None,
  }
}

pub fn sample_orders() -> Vec<Order> {
  vec![
    build(SeedOrder {
      order_number: "ORD-2025-001",
      patient_name: "John Smith",
      prosthetic_type: ProstheticType::Crown,
      special_instructions: "Patient prefers natural shade A2, high bite strength required",
      clinic_name: "Downtown Dental",
      assigned_lab: None,
      priority: OrderPriority::Normal,
      due_date: day(2025, 9, 5),
      estimated_completion_time: None,
      tracking: None,
      history: vec![
        history_entry(
          OrderStatus::Preparation,
          day(2025, 6, 1),
          "Order received and preparation started",
        ),
        history_entry(
          OrderStatus::InProduction,
          day(2025, 6, 8),
          "Crown fabrication in progress",
        ),
      ],
      photos: vec![],
    }),
    build(SeedOrder {
      order_number: "ORD-2025-002",
      patient_name: "Sarah Johnson",
      prosthetic_type: ProstheticType::Dentures,
      special_instructions: "Complete upper denture, patient has sensitive gums",
      clinic_name: "Westside Family Dental",
      assigned_lab: None,
      priority: OrderPriority::High,
      due_date: day(2025, 8, 8),
      estimated_completion_time: None,
      tracking: None,
      history: vec![history_entry(
        OrderStatus::Preparation,
        day(2025, 6, 6),
        "Order received, reviewing requirements",
      )],
      photos: vec![],
    }),
    build(SeedOrder {
      order_number: "ORD-2025-003",
      patient_name: "Michael Brown",
      prosthetic_type: ProstheticType::Bridge,
      special_instructions: "3-unit bridge, molars 14-16, shade B3",
      clinic_name: "Smile Center",
      assigned_lab: None,
      priority: OrderPriority::Normal,
      due_date: day(2025, 12, 2),
      estimated_completion_time: Some(day(2025, 8, 2)),
      tracking: None,
      history: vec![
        history_entry(
          OrderStatus::Preparation,
          day(2025, 6, 10),
          "Order received and preparation started",
        ),
        history_entry(
          OrderStatus::InProduction,
          day(2025, 6, 14),
          "Bridge fabrication in progress",
        ),
        history_entry(
          OrderStatus::PostProductionProcessing,
          day(2025, 6, 18),
          "Final polishing and quality control",
        ),
      ],
      photos: vec![],
    }),
    build(SeedOrder {
      order_number: "ORD-2025-004",
      patient_name: "Emily Davis",
      prosthetic_type: ProstheticType::Veneer,
      special_instructions: "Upper anterior 6 veneers, Hollywood white preferred",
      clinic_name: "Elite Dental Care",
      assigned_lab: None,
      priority: OrderPriority::Urgent,
      due_date: day(2025, 12, 31),
      estimated_completion_time: Some(day(2025, 12, 31)),
      tracking: None,
      history: vec![
        history_entry(
          OrderStatus::Preparation,
          day(2025, 6, 18),
          "Order received and preparation started",
        ),
        history_entry(
          OrderStatus::InProduction,
          day(2025, 6, 20),
          "Veneer fabrication in progress",
        ),
        history_entry(
          OrderStatus::PostProductionProcessing,
          day(2025, 6, 28),
          "Final shaping and color matching",
        ),
        history_entry(
          OrderStatus::ReadyForShipping,
          day(2025, 6, 30),
          "Quality control passed, ready for shipping",
        ),
      ],
      photos: vec![],
    }),
    build(SeedOrder {
      order_number: "ORD-2025-005",
      patient_name: "Robert Wilson",
      prosthetic_type: ProstheticType::Implant,
      special_instructions: "Single implant crown, titanium base, tooth #30",
      clinic_name: "Downtown Dental",
      assigned_lab: Some("Premium Dental Lab"),
      priority: OrderPriority::Normal,
      // Past due while still in transit; keeps one overdue order on the
      // admin dashboard.
      due_date: day(2025, 6, 28),
      estimated_completion_time: Some(day(2025, 6, 26)),
      tracking: Some(("1Z999AA1234567890", Carrier::Ups)),
      history: vec![
        history_entry(
          OrderStatus::Preparation,
          day(2025, 6, 15),
          "Order received and preparation started",
        ),
        history_entry(
          OrderStatus::InProduction,
          day(2025, 6, 20),
          "Implant crown fabrication in progress",
        ),
        history_entry(
          OrderStatus::PostProductionProcessing,
          day(2025, 6, 26),
          "Final fitting and quality control",
        ),
        history_entry(
          OrderStatus::ReadyForShipping,
          day(2025, 6, 28),
          "Packaged and ready for shipping",
        ),
        history_entry(
          OrderStatus::Shipped,
          day(2025, 6, 30),
          "Package shipped via UPS",
        ),
      ],
      photos: vec![(
        OrderStatus::InProduction,
        "/photos/implant-crown-progress.jpg",
        "Implant crown progress",
        day(2025, 6, 22),
      )],
    }),
    build(SeedOrder {
      order_number: "ORD-2025-006",
      patient_name: "Lisa Anderson",
      prosthetic_type: ProstheticType::PartialDenture,
      special_instructions: "Lower partial, flexible base material requested",
      clinic_name: "Healthy Smiles Clinic",
      assigned_lab: Some("TechLab Solutions"),
      priority: OrderPriority::Low,
      due_date: day(2025, 7, 25),
      estimated_completion_time: Some(day(2025, 7, 20)),
      tracking: Some(("1Z999AA0987654321", Carrier::Ups)),
      history: vec![
        history_entry(
          OrderStatus::Preparation,
          day(2025, 6, 10),
          "Order received and preparation started",
        ),
        history_entry(
          OrderStatus::InProduction,
          day(2025, 6, 13),
          "Partial denture fabrication in progress",
        ),
        history_entry(
          OrderStatus::PostProductionProcessing,
          day(2025, 6, 20),
          "Final adjustments and polishing",
        ),
        history_entry(
          OrderStatus::ReadyForShipping,
          day(2025, 6, 27),
          "Quality control passed, ready for shipping",
        ),
        history_entry(
          OrderStatus::Shipped,
          day(2025, 7, 2),
          "Package shipped via UPS",
        ),
        history_entry(
          OrderStatus::Delivered,
          day(2025, 7, 5),
          "Package delivered successfully",
        ),
      ],
      photos: vec![(
        OrderStatus::PostProductionProcessing,
        "/photos/partial-polishing.jpg",
        "Final polishing complete",
        day(2025, 6, 21),
      )],
    }),
  ]
}

struct SeedUser {
  email: &'static str,
  name: &'static str,
  role: UserRole,
  organization_name: &'static str,
  is_active: bool,
  created_at: DateTime<Utc>,
  last_login: Option<DateTime<Utc>>,
  permissions: Vec<Permission>,
}

fn clinic_permissions() -> Vec<Permission> {
  vec![
    Permission::ViewOrders,
    Permission::CreateOrders,
    Permission::EditOrders,
  ]
}

fn lab_permissions() -> Vec<Permission> {
  vec![Permission::ViewOrders, Permission::EditOrders]
}

pub fn sample_users() -> Vec<User> {
  let seeds = vec![
    SeedUser {
      email: "admin@labtrack.test",
      name: "System Administrator",
      role: UserRole::Admin,
      organization_name: "Labtrack System",
      is_active: true,
      created_at: day(2024, 1, 1),
      last_login: Some(day(2024, 12, 30)),
      permissions: vec![
        Permission::ViewOrders,
        Permission::CreateOrders,
        Permission::EditOrders,
        Permission::DeleteOrders,
        Permission::ManageUsers,
        Permission::ViewAnalytics,
        Permission::SystemAdmin,
      ],
    },
    SeedUser {
      email: "contact@downtown-dental.com",
      name: "Dr. Sarah Johnson",
      role: UserRole::Clinic,
      organization_name: "Downtown Dental",
      is_active: true,
      created_at: day(2024, 2, 15),
      last_login: Some(day(2024, 12, 29)),
      permissions: clinic_permissions(),
    },
    SeedUser {
      email: "office@westside-family.com",
      name: "Dr. Michael Chen",
      role: UserRole::Clinic,
      organization_name: "Westside Family Dental",
      is_active: true,
      created_at: day(2024, 3, 10),
      last_login: Some(day(2024, 12, 28)),
      permissions: clinic_permissions(),
    },
    SeedUser {
      email: "production@premium-lab.com",
      name: "Premium Dental Lab",
      role: UserRole::Lab,
      organization_name: "Premium Dental Lab",
      is_active: true,
      created_at: day(2024, 1, 20),
      last_login: Some(day(2024, 12, 30)),
      permissions: lab_permissions(),
    },
    SeedUser {
      email: "info@techlab-solutions.com",
      name: "TechLab Solutions",
      role: UserRole::Lab,
      organization_name: "TechLab Solutions",
      is_active: true,
      created_at: day(2024, 2, 1),
      last_login: Some(day(2024, 12, 29)),
      permissions: lab_permissions(),
    },
    SeedUser {
      email: "contact@smile-center.com",
      name: "Dr. Emily Davis",
      role: UserRole::Clinic,
      organization_name: "Smile Center",
      is_active: true,
      created_at: day(2024, 4, 5),
      last_login: Some(day(2024, 12, 27)),
      permissions: vec![Permission::ViewOrders, Permission::CreateOrders],
    },
    SeedUser {
      email: "orders@elite-dental.com",
      name: "Dr. Robert Wilson",
      role: UserRole::Clinic,
      organization_name: "Elite Dental Care",
      is_active: false,
      created_at: day(2024, 5, 12),
      last_login: Some(day(2024, 11, 15)),
      permissions: vec![Permission::ViewOrders, Permission::CreateOrders],
    },
    SeedUser {
      email: "front-desk@healthy-smiles.com",
      name: "Dr. Lisa Anderson",
      role: UserRole::Clinic,
      organization_name: "Healthy Smiles Clinic",
      is_active: true,
      created_at: day(2024, 6, 18),
      last_login: Some(day(2024, 12, 26)),
      permissions: clinic_permissions(),
    },
  ];

  seeds
    .into_iter()
    .map(|seed| User {
      id: Uuid::new_v4(),
      email: seed.email.to_string(),
      name: seed.name.to_string(),
      role: seed.role,
      organization_name: seed.organization_name.to_string(),
      is_active: seed.is_active,
      created_at: seed.created_at,
      last_login: seed.last_login,
      permissions: seed.permissions,
      contact_info: Some(ContactInfo::default()),
    })
    .collect()
}
