//! 登录 / 注册提示
//!
//! 返回登录成功的用户名；选择游客或输入结束时返回 `None`。

use std::io::{BufRead, Write};

use anyhow::Result;
use gomoku_game::{AuthError, AuthService, UserStore};
use tracing::info;

/// 读取一行输入（去掉行尾换行），输入结束返回 `None`
pub fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<Option<String>> {
    write!(output, "{}", label)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// 登录循环
pub fn authenticate<S, R, W>(
    auth: &mut AuthService<S>,
    input: &mut R,
    output: &mut W,
    default_name: &str,
) -> Result<Option<String>>
where
    S: UserStore,
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(output, "[l] 登录  [r] 注册  [g] 游客")?;
        let Some(choice) = prompt(input, output, "> ")? else {
            return Ok(None);
        };

        let result = match choice.trim() {
            "l" | "login" => login(auth, input, output, default_name)?,
            "r" | "register" => register(auth, input, output)?,
            "g" | "guest" | "" => return Ok(None),
            other => {
                writeln!(output, "未知选项: {}", other)?;
                continue;
            }
        };

        match result {
            Some(Ok(username)) => {
                writeln!(output, "欢迎, {}!", username)?;
                return Ok(Some(username));
            }
            Some(Err(e)) => report(output, &e)?,
            None => return Ok(None),
        }
    }
}

type Attempt = Option<std::result::Result<String, AuthError>>;

fn login<S: UserStore, R: BufRead, W: Write>(
    auth: &AuthService<S>,
    input: &mut R,
    output: &mut W,
    default_name: &str,
) -> Result<Attempt> {
    let label = if default_name.is_empty() {
        "用户名: ".to_string()
    } else {
        format!("用户名 [{}]: ", default_name)
    };
    let Some(mut username) = prompt(input, output, &label)? else {
        return Ok(None);
    };
    if username.trim().is_empty() {
        username = default_name.to_string();
    }
    let Some(password) = prompt(input, output, "密码: ")? else {
        return Ok(None);
    };

    Ok(Some(
        auth.login(&username, &password)
            .map(|_| username.trim().to_string()),
    ))
}

fn register<S: UserStore, R: BufRead, W: Write>(
    auth: &mut AuthService<S>,
    input: &mut R,
    output: &mut W,
) -> Result<Attempt> {
    let Some(username) = prompt(input, output, "新用户名: ")? else {
        return Ok(None);
    };
    let Some(password) = prompt(input, output, "密码: ")? else {
        return Ok(None);
    };
    let Some(confirm) = prompt(input, output, "确认密码: ")? else {
        return Ok(None);
    };

    let result = auth
        .register(&username, &password, &confirm)
        .map(|_| username.trim().to_string());
    if let Ok(name) = &result {
        info!("新用户: {}", name);
    }
    Ok(Some(result))
}

fn report<W: Write>(output: &mut W, err: &AuthError) -> Result<()> {
    let field = if err.concerns_username() { "用户名" } else { "密码" };
    writeln!(output, "{}错误: {}", field, err)?;
    Ok(())
}
