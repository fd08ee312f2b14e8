use service_object::{ErrorList, ErrorRecord, Service, ServiceObject};

#[derive(Debug, Clone)]
struct User {
    id: u32,
    name: String,
}

struct CreateUser {
    name: String,
    email: String,
}

impl Service for CreateUser {
    const NAME: &'static str = "create_user";
    type Output = Option<User>;

    fn perform(&mut self, errors: &mut ErrorList) -> Self::Output {
        if self.name.trim().is_empty() {
            errors.push(
                ErrorRecord::builder()
                    .message("name must not be empty".to_string())
                    .kind("validation".to_string())
                    .build(),
            );
        }
        if !self.email.contains('@') {
            errors.push(
                ErrorRecord::builder()
                    .message(format!("'{}' is not a valid email", self.email))
                    .kind("validation".to_string())
                    .build(),
            );
        }
        if !errors.is_empty() {
            return None;
        }

        Some(User {
            id: 1,
            name: self.name.clone(),
        })
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 成功路径：读取 result 触发执行
    let mut service = ServiceObject::new(CreateUser {
        name: "Alice".into(),
        email: "alice@example.com".into(),
    });
    if let Some(user) = service.result() {
        println!("created: id={} name={}", user.id, user.name);
    }
    println!("success: {}", service.success());

    // 失败路径：先显式调用，再检查错误
    let mut service = ServiceObject::new(CreateUser {
        name: "".into(),
        email: "not-an-email".into(),
    });
    service.call();

    if !service.success() {
        for entry in service.errors()? {
            println!("error: {}", entry["message"]);
        }
    }

    Ok(())
}
