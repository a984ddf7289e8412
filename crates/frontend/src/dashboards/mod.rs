pub mod d200_admin_dashboard;

pub use d200_admin_dashboard::AdminDashboard;
