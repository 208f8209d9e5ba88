use crate::errors::Notification;

pub trait NotificationPort: Send + Sync {
    fn notify(&self, notification: Notification);
}
